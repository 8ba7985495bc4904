use outcome::{ nev, Fault, IntoOutcome, Outcome };

use crate::TestError ;

#[test]
fn from_std_result() {
	let ok: Outcome<i32, TestError> = Ok( 42 ).into();
	let err: Outcome<i32, TestError> = Err( TestError::new( 1, "no" )).into();
	assert_eq!( ok, Outcome::Success( 42 ));
	assert_eq!( err, Outcome::Failure( vec![ TestError::new( 1, "no" )]));
}

#[test]
fn into_std_result_keeps_every_error() {
	let outcome = Outcome::<i32, _>::fail_all([ TestError::new( 1, "a" ), TestError::new( 2, "b" )]);
	assert_eq!( outcome.into_result(), Err( vec![ TestError::new( 1, "a" ), TestError::new( 2, "b" )]));
	assert_eq!( Outcome::<i32, TestError>::Success( 5 ).into_result(), Ok( 5 ));
}

#[test]
fn from_error_lists() {
	let from_vec: Outcome<i32, TestError> = vec![ TestError::new( 1, "a" )].into();
	let from_nonempty: Outcome<i32, TestError> = nev![ TestError::new( 1, "a" )].into();
	assert_eq!( from_vec, from_nonempty );
}

#[test]
fn errors_nonempty() {
	let outcome = Outcome::<i32, _>::fail_all([ TestError::new( 1, "a" ), TestError::new( 2, "b" )]);
	let errors = outcome.errors_nonempty().map(| errors | errors.first().clone() );
	assert_eq!( errors, Some( TestError::new( 1, "a" )));
	assert!( Outcome::<i32, TestError>::Failure( vec![] ).errors_nonempty().is_none() );
	assert!( Outcome::<i32, TestError>::Success( 1 ).errors_nonempty().is_none() );
}

#[test]
fn accessors() {
	let success: Outcome<i32, TestError> = 42.success();
	assert_eq!( success.value(), Some( &42 ));
	assert!( success.errors().is_empty() );
	assert_eq!( success.clone().into_value(), Some( 42 ));
	assert!( success.into_errors().is_empty() );

	let failure = TestError::new( 7, "seven" ).fail::<i32>();
	assert_eq!( failure.value(), None );
	assert_eq!( failure.first_error().map( Fault::code ), Some( 7 ));
	assert_eq!( failure.clone().into_value(), None );
	assert_eq!( failure.into_errors(), [ TestError::new( 7, "seven" )]);
}

#[test]
fn display() {
	let success: Outcome<i32, TestError> = Outcome::Success( 42 );
	let failure = Outcome::<i32, _>::fail_all([ TestError::new( 1, "first" ), TestError::new( 2, "second" )]);
	assert_eq!( success.to_string(), "success: 42" );
	assert_eq!( failure.to_string(), "failure: first; second" );
}
