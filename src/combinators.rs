//! Named aliases, default recovery and construction helpers built on the core
//! operations of [`Outcome`].

use crate::Outcome ;



impl<T, E> Outcome<T, E> {

	/// Wraps a value as a success.
	#[inline] pub fn success( value: T ) -> Self { Outcome::Success( value ) }

	/// Wraps a single error as a failure.
	#[inline] pub fn fail( error: E ) -> Self { Outcome::Failure( vec![ error ]) }

	/// Wraps a sequence of errors as a failure, keeping their order.
	///
	/// An empty sequence yields a failure with no errors.
	pub fn fail_all( errors: impl IntoIterator<Item = E> ) -> Self {
		Outcome::Failure( errors.into_iter().collect() )
	}

	/// Alias of [`map`]( Outcome::map ).
	#[inline]
	pub fn select<U>( self, select: impl FnOnce( T ) -> U ) -> Outcome<U, E> {
		self.map( select )
	}

	/// Alias of [`bind`]( Outcome::bind ).
	#[inline]
	pub fn flat_map<U>( self, flat_map: impl FnOnce( T ) -> Outcome<U, E> ) -> Outcome<U, E> {
		self.bind( flat_map )
	}

	/// The successful value, or `fallback` on failure.
	pub fn or_else( self, fallback: T ) -> T {
		self.fold(| value | value, |_| fallback )
	}

	/// The successful value, or the result of `fallback` on failure.
	/// `fallback` is only called on failure.
	pub fn or_else_with( self, fallback: impl FnOnce() -> T ) -> T {
		self.fold(| value | value, |_| fallback() )
	}

	/// The successful value, or a value recovered from the errors on failure.
	/// `recover` is only called on failure.
	pub fn or_else_recover( self, recover: impl FnOnce( Vec<E> ) -> T ) -> T {
		self.fold(| value | value, recover )
	}

}

/// Lifts any value into an [`Outcome`], either as the success value or as a
/// single error.
///
/// ```
/// use outcome::{ IntoOutcome, Outcome };
///
/// let ok: Outcome<i32, String> = 42.success();
/// let failed: Outcome<i32, String> = "Not the truth!".to_string().fail();
///
/// assert!( ok.is_success() );
/// assert_eq!( failed.errors(), [ "Not the truth!".to_string() ]);
/// ```
pub trait IntoOutcome: Sized {

	/// `Outcome::Success( self )`.
	fn success<E>( self ) -> Outcome<Self, E> { Outcome::success( self ) }

	/// `Outcome::Failure( vec![ self ])`.
	fn fail<T>( self ) -> Outcome<T, Self> { Outcome::fail( self ) }

}

impl<V> IntoOutcome for V {}
