//! Capturing panics as failed outcomes.
//!
//! These adapters are the bridge from code that panics into [`Outcome`]. Only
//! a panic raised while running the wrapped closure (or, for the async forms,
//! while polling the future it returns) is captured. The handler runs outside
//! the capture region, so a handler that panics is not converted.
//!
//! The default panic hook still runs before the panic is captured.

use std::any::Any ;
use std::panic::{ self, AssertUnwindSafe };
use pipe_trait::Pipe ;
#[cfg( feature = "async" )] use std::future::Future ;
#[cfg( feature = "async" )] use futures::FutureExt ;

use crate::{ Fault, Outcome, PanicFault };



fn captured( payload: Box<dyn Any + Send> ) -> PanicFault {
	let fault = PanicFault::from_payload( payload );
	log::debug!( "captured panic ( code {} ): {}", fault.code(), fault.panic_message() );
	fault
}

fn capture<T, E>( payload: Box<dyn Any + Send>, on_panic: impl FnOnce( PanicFault ) -> E ) -> Outcome<T, E> {
	captured( payload ).pipe( on_panic ).pipe( Outcome::fail )
}

/// Runs `produce`, turning a panic into a failure with the default
/// [`PanicFault`] error.
///
/// ```
/// use outcome::{ attempt, Fault, Outcome };
///
/// let answer: Outcome<i32> = attempt(|| 42 );
/// assert_eq!( answer, Outcome::Success( 42 ));
///
/// let broken: Outcome<i32> = attempt(|| -> i32 { panic!( "Test Exception" ) });
/// assert_eq!( broken.first_error().map(| error | error.message() ), Some( "Test Exception".to_string() ));
/// ```
pub fn attempt<T, E: From<PanicFault>>( produce: impl FnOnce() -> T ) -> Outcome<T, E> {
	attempt_with( produce, E::from )
}

/// Runs `produce`, turning a panic into a failure holding `on_panic`'s error.
///
/// The handler is required; there is no way to pass an absent one.
///
/// ```compile_fail
/// # use outcome::{ attempt_with, Outcome };
/// let answer: Outcome<i32, String> = attempt_with(|| 42, None );
/// ```
pub fn attempt_with<T, E>(
	produce: impl FnOnce() -> T,
	on_panic: impl FnOnce( PanicFault ) -> E,
) -> Outcome<T, E> {
	match panic::catch_unwind( AssertUnwindSafe( produce )) {
		Ok( value ) => Outcome::Success( value ),
		Err( payload ) => capture( payload, on_panic ),
	}
}

/// Async form of [`attempt`]: calls `produce` and awaits its future, turning a
/// panic in either into a failure with the default [`PanicFault`] error.
#[cfg( feature = "async" )]
pub async fn attempt_async<T, E, F>( produce: impl FnOnce() -> F ) -> Outcome<T, E>
where
	E: From<PanicFault>,
	F: Future<Output = T>,
{
	attempt_async_with( produce, E::from ).await
}

/// Async form of [`attempt_with`].
#[cfg( feature = "async" )]
pub async fn attempt_async_with<T, E, F>(
	produce: impl FnOnce() -> F,
	on_panic: impl FnOnce( PanicFault ) -> E,
) -> Outcome<T, E>
where
	F: Future<Output = T>,
{
	match run( produce ).await {
		Ok( value ) => Outcome::Success( value ),
		Err( payload ) => capture( payload, on_panic ),
	}
}

/// Async form of [`attempt_with`] whose handler is itself asynchronous.
#[cfg( feature = "async" )]
pub async fn attempt_async_with_future<T, E, F, H>(
	produce: impl FnOnce() -> F,
	on_panic: impl FnOnce( PanicFault ) -> H,
) -> Outcome<T, E>
where
	F: Future<Output = T>,
	H: Future<Output = E>,
{
	match run( produce ).await {
		Ok( value ) => Outcome::Success( value ),
		Err( payload ) => Outcome::fail( on_panic( captured( payload )).await ),
	}
}

#[cfg( feature = "async" )]
async fn run<T, F>( produce: impl FnOnce() -> F ) -> Result<T, Box<dyn Any + Send>>
where
	F: Future<Output = T>,
{
	let pending = panic::catch_unwind( AssertUnwindSafe( produce ))?;
	AssertUnwindSafe( pending ).catch_unwind().await
}
