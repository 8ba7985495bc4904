//! Payload-free sentinels that convert into an [`Outcome`].

use crate::{ BoxedFault, Outcome };



/// An [`Outcome`] for commands that either complete or fail, with no value to report.
pub type Command<E = BoxedFault> = Outcome<(), E>;

/// Converts into a failure that carries no errors.
///
/// ```
/// use outcome::{ Failed, Outcome };
///
/// fn lookup( key: &str ) -> Outcome<u32, String> {
/// 	if key.is_empty() { return Failed.into() }
/// 	Outcome::Success( 7 )
/// }
///
/// assert_eq!( lookup( "" ), Outcome::Failure( vec![] ));
/// ```
#[derive( Debug, Default, Clone, Copy, PartialEq, Eq, Hash )]
pub struct Failed ;

/// Converts into the successful [`Command`].
#[derive( Debug, Default, Clone, Copy, PartialEq, Eq, Hash )]
pub struct Succeeded ;

impl<T, E> From<Failed> for Outcome<T, E> {
	fn from( _: Failed ) -> Self { Outcome::Failure( Vec::new() ) }
}

impl<E> From<Succeeded> for Command<E> {
	fn from( _: Succeeded ) -> Self { Outcome::Success(()) }
}
