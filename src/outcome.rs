//! The core success-or-errors type.

use itertools::Itertools ;
use nonempty_collections::NEVec ;

use crate::BoxedFault ;



/// Either a successful value or an ordered list of errors.
///
/// The variant is the discriminant; the payload is never inspected to decide
/// which branch holds, so `Outcome::Success( 0 )` is as successful as any other
/// value. A failure may hold any number of errors, including none (see
/// [`Failed`]( crate::Failed )). Errors keep the order they were added in and
/// duplicates are preserved.
///
/// Equality and hashing are structural: two outcomes are equal when they are
/// the same variant and their payloads are equal, errors compared pairwise in
/// order.
///
/// # Type Parameters
/// - `T`: the success value
/// - `E`: the error element, [`BoxedFault`] unless a fixed error type is chosen
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub enum Outcome<T, E = BoxedFault> {
	/// The operation produced a value.
	Success( T ),
	/// The operation failed for the listed reasons.
	Failure( Vec<E> ),
}

impl<T, E> Outcome<T, E> {

	/// Applies `map` to a successful value. Failures pass through untouched
	/// and `map` is not called.
	///
	/// ```
	/// # use outcome::Outcome ;
	/// let outcome: Outcome<i32, &str> = Outcome::Success( 42 );
	/// assert_eq!( outcome.map(| value | value.to_string() ), Outcome::Success( "42".to_string() ));
	/// ```
	pub fn map<U>( self, map: impl FnOnce( T ) -> U ) -> Outcome<U, E> {
		match self {
			Outcome::Success( value ) => Outcome::Success( map( value )),
			Outcome::Failure( errors ) => Outcome::Failure( errors ),
		}
	}

	/// Chains an operation that may itself fail. The outcome `bind` returns is
	/// used as is, it is not nested. Failures pass through and `bind` is not called.
	pub fn bind<U>( self, bind: impl FnOnce( T ) -> Outcome<U, E> ) -> Outcome<U, E> {
		match self {
			Outcome::Success( value ) => bind( value ),
			Outcome::Failure( errors ) => Outcome::Failure( errors ),
		}
	}

	/// Collapses the outcome into a single value. Exactly one handler runs.
	pub fn fold<R>(
		self,
		on_success: impl FnOnce( T ) -> R,
		on_failure: impl FnOnce( Vec<E> ) -> R,
	) -> R {
		match self {
			Outcome::Success( value ) => on_success( value ),
			Outcome::Failure( errors ) => on_failure( errors ),
		}
	}

	/// Runs the handler matching the outcome for its side effects.
	///
	/// Both handlers are required; leaving one out does not compile.
	///
	/// ```compile_fail
	/// # use outcome::Outcome ;
	/// let outcome: Outcome<i32, &str> = Outcome::Success( 42 );
	/// outcome.dispatch(| _ | {}, None );
	/// ```
	pub fn dispatch( self, on_success: impl FnOnce( T ), on_failure: impl FnOnce( Vec<E> )) {
		self.fold( on_success, on_failure );
	}

	/// Re-types every error, preserving their order.
	pub fn map_errors<E2>( self, map: impl FnMut( E ) -> E2 ) -> Outcome<T, E2> {
		match self {
			Outcome::Success( value ) => Outcome::Success( value ),
			Outcome::Failure( errors ) => Outcome::Failure( errors.into_iter().map( map ).collect() ),
		}
	}

	/// Borrows the payload.
	pub fn as_ref( &self ) -> Outcome<&T, &E> {
		match self {
			Outcome::Success( value ) => Outcome::Success( value ),
			Outcome::Failure( errors ) => Outcome::Failure( errors.iter().collect() ),
		}
	}

	#[inline] pub fn is_success( &self ) -> bool { matches!( self, Outcome::Success( _ )) }

	#[inline] pub fn is_failure( &self ) -> bool { matches!( self, Outcome::Failure( _ )) }

	/// The successful value, if any.
	pub fn value( &self ) -> Option<&T> {
		match self {
			Outcome::Success( value ) => Some( value ),
			Outcome::Failure( _ ) => None,
		}
	}

	/// The errors in the order they were recorded. Empty on success.
	pub fn errors( &self ) -> &[E] {
		match self {
			Outcome::Success( _ ) => &[],
			Outcome::Failure( errors ) => errors,
		}
	}

	/// The first recorded error, if any.
	#[inline] pub fn first_error( &self ) -> Option<&E> { self.errors().first() }

	pub fn into_value( self ) -> Option<T> {
		self.fold( Some, |_| None )
	}

	pub fn into_errors( self ) -> Vec<E> {
		self.fold(|_| Vec::new(), | errors | errors )
	}

	/// The errors as a non-empty list. `None` on success and on a failure
	/// without errors.
	pub fn errors_nonempty( self ) -> Option<NEVec<E>> {
		NEVec::try_from_vec( self.into_errors() )
	}

	/// Converts into a std `Result`, keeping every error.
	///
	/// # Errors
	/// Returns `Err` with every recorded error, in order, when the outcome is a
	/// failure.
	pub fn into_result( self ) -> Result<T, Vec<E>> {
		self.fold( Ok, Err )
	}

}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from( result: Result<T, E> ) -> Self { match result {
		Ok( value ) => Outcome::Success( value ),
		Err( error ) => Outcome::Failure( vec![ error ]),
	}}
}

impl<T, E> From<Vec<E>> for Outcome<T, E> {
	fn from( errors: Vec<E> ) -> Self { Outcome::Failure( errors ) }
}

impl<T, E> From<NEVec<E>> for Outcome<T, E> {
	fn from( errors: NEVec<E> ) -> Self { Outcome::Failure( errors.into_iter().collect() ) }
}

impl<T: std::fmt::Display, E: std::fmt::Display> std::fmt::Display for Outcome<T, E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
		match self {
			Outcome::Success( value ) => write!( f, "success: {}", value ),
			Outcome::Failure( errors ) => write!( f, "failure: {}", errors.iter().join( "; " )),
		}
	}
}
