//! Bind-then-project chaining and the `comprehend!` query macro.

use crate::Outcome ;



impl<T, E> Outcome<T, E> {

	/// Binds a dependent step, then combines both values.
	///
	/// Equivalent to `self.bind(| t | bind( &t ).map(| u | project( t, u )))`.
	/// The binder borrows the first value so the projector can take it by value.
	///
	/// ```
	/// # use outcome::Outcome ;
	/// let outcome = Outcome::<_, String>::Success( "Test" )
	/// 	.select_many(| _ | Outcome::Success( 42 ), | _, number | number );
	/// assert_eq!( outcome, Outcome::Success( 42 ));
	/// ```
	pub fn select_many<U, V>(
		self,
		bind: impl FnOnce( &T ) -> Outcome<U, E>,
		project: impl FnOnce( T, U ) -> V,
	) -> Outcome<V, E> {
		self.bind(| first | bind( &first ).map(| second | project( first, second )))
	}

}

/// Query-style chaining over [`Outcome`].
///
/// Every `from <pattern> in <outcome>;` step binds the success value of
/// `<outcome>` to `<pattern>` for the rest of the block; the final
/// `select <expr>` builds the success value. The first failing step ends the
/// chain and its errors become the result.
///
/// ```
/// use outcome::{ comprehend, Outcome };
///
/// fn parse( text: &str ) -> Outcome<i32, String> {
/// 	text.parse::<i32>().map_err(| _ | format!( "not a number: {}", text )).into()
/// }
///
/// let sum = comprehend! {
/// 	from a in parse( "40" );
/// 	from b in parse( "2" );
/// 	select a + b
/// };
/// assert_eq!( sum, Outcome::Success( 42 ));
///
/// let failed = comprehend! {
/// 	from a in parse( "forty" );
/// 	from b in parse( "2" );
/// 	select a + b
/// };
/// assert_eq!( failed, Outcome::Failure( vec![ "not a number: forty".to_string() ]));
/// ```
#[macro_export]
macro_rules! comprehend {
	( select $result:expr $(;)? ) => {
		$crate::Outcome::Success( $result )
	};
	( from $binding:pat in $source:expr ; $( $rest:tt )+ ) => {
		$crate::Outcome::bind( $source, move | $binding | $crate::comprehend!( $( $rest )+ ))
	};
}
