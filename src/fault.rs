//! The error capability carried inside a failed [`Outcome`]( crate::Outcome ).
//!
//! Any type can be used as the error element of an `Outcome<T, E>`. The
//! [`Fault`] trait is only needed for the dynamically typed default,
//! [`BoxedFault`], where errors from unrelated hierarchies share one list and
//! must still compare and hash by value.

use std::any::Any ;
use std::hash::{ Hash, Hasher };
use sha2::{ Digest, Sha256 };
use thiserror::Error ;



/// An error description with a stable identity.
///
/// Two faults are considered the same when their [`code`]( Fault::code ) and
/// [`message`]( Fault::message ) match, regardless of their concrete type.
/// The message defaults to the `Display` text, which pairs naturally with
/// `thiserror`:
///
/// ```
/// use outcome::Fault ;
///
/// #[derive( Debug, thiserror::Error )]
/// enum StorageError {
/// 	#[error( "Not Found: {0}" )] NotFound( String ),
/// 	#[error( "Read Only" )] ReadOnly,
/// }
///
/// impl Fault for StorageError {
/// 	fn code( &self ) -> u64 { match self {
/// 		StorageError::NotFound( _ ) => 404,
/// 		StorageError::ReadOnly => 403,
/// 	}}
/// }
///
/// assert_eq!( StorageError::NotFound( "a.txt".into() ).message(), "Not Found: a.txt" );
/// ```
pub trait Fault: std::fmt::Debug + std::fmt::Display + Send + Sync + 'static {

	/// Numeric identity of the fault.
	fn code( &self ) -> u64 ;

	/// Human readable description.
	fn message( &self ) -> String { self.to_string() }

	/// Erases the concrete type so faults from different sources can share a list.
	fn boxed( self ) -> BoxedFault where Self: Sized { Box::new( self ) }

}

/// A type-erased [`Fault`]; the default error element of [`Outcome`]( crate::Outcome ).
pub type BoxedFault = Box<dyn Fault>;

impl PartialEq for dyn Fault {
	fn eq( &self, other: &Self ) -> bool {
		self.code() == other.code() && self.message() == other.message()
	}
}

impl Eq for dyn Fault {}

impl Hash for dyn Fault {
	fn hash<H: Hasher>( &self, state: &mut H ) {
		self.code().hash( state );
		self.message().hash( state );
	}
}

/// The error produced by the default handler of [`attempt`]( crate::attempt )
/// and its async counterparts when the wrapped code panics.
#[derive( Error, Debug, Clone, PartialEq, Eq, Hash )]
#[error( "Panic: {message}" )]
pub struct PanicFault {
	message: String,
	code: u64,
}

impl PanicFault {

	const UNKNOWN_PAYLOAD: &'static str = "unknown panic payload";

	/// Builds a fault from a panic message.
	///
	/// The code is the leading eight bytes of the SHA-256 digest of the
	/// message, read big-endian, so it is the same across builds and platforms.
	pub fn new( message: impl Into<String> ) -> Self {
		let message = message.into();
		let digest = Sha256::digest( message.as_bytes() );
		let mut leading = [ 0u8; 8 ];
		leading.copy_from_slice( &digest[ ..8 ] );
		Self { code: u64::from_be_bytes( leading ), message }
	}

	/// Builds a fault from the payload returned by `catch_unwind`.
	pub(crate) fn from_payload( payload: Box<dyn Any + Send> ) -> Self {
		match payload.downcast::<String>() {
			Ok( message ) => Self::new( *message ),
			Err( payload ) => match payload.downcast_ref::<&'static str>() {
				Some( message ) => Self::new( *message ),
				None => Self::new( Self::UNKNOWN_PAYLOAD ),
			},
		}
	}

	/// The message the code panicked with.
	#[inline] pub fn panic_message( &self ) -> &str { &self.message }

}

impl Fault for PanicFault {
	fn code( &self ) -> u64 { self.code }
	fn message( &self ) -> String { self.message.clone() }
}

impl From<PanicFault> for BoxedFault {
	fn from( fault: PanicFault ) -> Self { Box::new( fault ) }
}
