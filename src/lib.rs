//! A success-or-errors type for building failure-aware pipelines.
//!
//! An [`Outcome`] is either a **success** holding a value, or a **failure**
//! holding an ordered list of errors. Steps are chained with combinators that
//! skip themselves once a failure is reached, and the chain is ended by
//! collapsing the outcome back into a plain value or a side effect.
//!
//! # Core Concepts
//!
//! - [`Outcome`]: `Success( T )` or `Failure( Vec<E> )`. The variant alone says
//! 	which branch holds; a successful `0` or `""` is still a success.
//!
//! - **Errors**: `E` may be any type. Without an explicit `E` the errors are
//! 	[`BoxedFault`]s, type-erased values implementing the [`Fault`] capability
//! 	(a numeric code and a message), so errors from unrelated hierarchies can
//! 	share one list and still compare by value.
//!
//! - **Combinators**: [`map`]( Outcome::map ) and [`bind`]( Outcome::bind )
//! 	(aliased as `select` and `flat_map`) transform successes and pass
//! 	failures through without calling their closure. [`fold`]( Outcome::fold ),
//! 	[`dispatch`]( Outcome::dispatch ) and the `or_else` family end the chain.
//!
//! - **Async**: with the default `async` feature every combinator has a
//! 	counterpart taking an asynchronous closure, and [`PendingOutcome`] adds
//! 	them all to futures that resolve to an [`Outcome`].
//!
//! - **Panics**: [`attempt`] and its async forms run code that may panic and
//! 	capture the panic as a failure.
//!
//! # Example
//!
//! ```
//! use outcome::{ Fault, IntoOutcome, Outcome };
//!
//! #[derive( Debug, thiserror::Error )]
//! #[error( "{field} is invalid" )]
//! struct Invalid { field: &'static str }
//!
//! impl Fault for Invalid {
//! 	fn code( &self ) -> u64 { 422 }
//! }
//!
//! fn parse_port( text: &str ) -> Outcome<u16> {
//! 	match text.parse::<u16>() {
//! 		Ok( port ) => port.success(),
//! 		Err( _ ) => Invalid { field: "port" }.boxed().fail(),
//! 	}
//! }
//!
//! let address = parse_port( "8080" )
//! 	.map(| port | format!( "localhost:{}", port ))
//! 	.or_else_with(|| "localhost:80".to_string() );
//! assert_eq!( address, "localhost:8080" );
//!
//! let report = parse_port( "http" ).fold(
//! 	| port | port.to_string(),
//! 	| errors | errors.iter().map(| error | error.message() ).collect::<Vec<_>>().join( ", " ),
//! );
//! assert_eq!( report, "port is invalid" );
//! ```
//!
//! # Async Pipelines
//!
//! ```
//! # #[cfg( feature = "async" )] {
//! use outcome::{ attempt_async, Outcome, PendingOutcome };
//!
//! async fn fetch( id: u32 ) -> u32 { id * 10 }
//!
//! # futures::executor::block_on( async {
//! let total = attempt_async::<_, outcome::BoxedFault, _>(|| fetch( 4 ))
//! 	.map_async(| value | async move { value + 2 })
//! 	.or_else( 0 )
//! 	.await ;
//! assert_eq!( total, 42 );
//! # });
//! # }
//! ```
//!
//! # Query Syntax
//!
//! [`comprehend!`] chains dependent steps and projects the bound values:
//!
//! ```
//! use outcome::{ comprehend, Outcome };
//!
//! let pair: Outcome<( &str, i32 ), String> = comprehend! {
//! 	from name in Outcome::Success( "answer" );
//! 	from value in Outcome::Success( 42 );
//! 	select ( name, value )
//! };
//! assert_eq!( pair, Outcome::Success(( "answer", 42 )));
//! ```
//!
//! # Features
//!
//! - `async` (default): the asynchronous combinators, [`PendingOutcome`] and
//! 	the `attempt_async*` adapters. Pulls in `futures`.
//!
//! The synchronous build is tested on its own with
//! `cargo test --no-default-features`; the async test binaries are skipped
//! there.

mod fault ;
mod outcome ;
mod combinators ;
mod marker ;
mod comprehension ;
mod attempt ;
#[cfg( feature = "async" )] mod lift ;

#[doc( no_inline )]
pub use nonempty_collections::{ NEVec, nev };

pub use fault::{ Fault, BoxedFault, PanicFault };
pub use outcome::Outcome ;
pub use combinators::IntoOutcome ;
pub use marker::{ Command, Failed, Succeeded };
pub use attempt::{ attempt, attempt_with };
#[cfg( feature = "async" )]
pub use attempt::{ attempt_async, attempt_async_with, attempt_async_with_future };
#[cfg( feature = "async" )]
pub use lift::PendingOutcome ;
