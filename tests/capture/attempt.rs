use outcome::{ attempt, attempt_with, BoxedFault, Fault, Outcome, PanicFault };

use crate::{ Probe, TestError };

#[test]
fn attempt_success_returns_value() {
	let outcome: Outcome<i32> = attempt(|| 42 );
	assert_eq!( outcome, Outcome::Success( 42 ));
}

#[test]
fn attempt_zero_is_success() {
	let outcome: Outcome<i32, PanicFault> = attempt(|| 0 );
	assert_eq!( outcome, Outcome::Success( 0 ));
}

#[test]
fn attempt_panic_uses_default_error() {
	let outcome: Outcome<i32> = attempt(|| -> i32 { panic!( "Test Exception" ) });
	let expected: BoxedFault = PanicFault::new( "Test Exception" ).boxed();
	assert_eq!( outcome.errors(), [ expected ]);
	assert_eq!( outcome.first_error().map(| error | error.message() ), Some( "Test Exception".to_string() ));
}

#[test]
fn attempt_panic_code_is_derived_from_message() {
	let first: Outcome<(), PanicFault> = attempt(|| panic!( "same" ));
	let second: Outcome<(), PanicFault> = attempt(|| panic!( "same" ));
	let other: Outcome<(), PanicFault> = attempt(|| panic!( "different" ));
	let code = | outcome: &Outcome<(), PanicFault> | outcome.first_error().map( Fault::code );
	assert_eq!( code( &first ), code( &second ));
	assert_ne!( code( &first ), code( &other ));
}

#[test]
fn panic_fault_code_is_fixed_for_a_message() {
	assert_eq!( PanicFault::new( "Test Exception" ).code(), 4_024_336_141_258_929_626 );
	assert_eq!( PanicFault::new( "Test Exception" ), PanicFault::new( String::from( "Test Exception" )));
}

#[test]
fn attempt_formatted_panic_keeps_message() {
	let id = 7 ;
	let outcome: Outcome<(), PanicFault> = attempt(|| panic!( "record {} missing", id ));
	assert_eq!( outcome.first_error().map( PanicFault::panic_message ), Some( "record 7 missing" ));
}

#[test]
fn attempt_non_string_payload() {
	let outcome: Outcome<(), PanicFault> = attempt(|| std::panic::panic_any( 42_u8 ));
	assert_eq!( outcome.first_error().map( PanicFault::panic_message ), Some( "unknown panic payload" ));
}

#[test]
fn attempt_with_custom_handler() {
	let outcome = attempt_with(|| -> i32 { panic!( "Test Exception" ) }, | fault | TestError::new( 500, fault.panic_message() ));
	assert_eq!( outcome, Outcome::fail( TestError::new( 500, "Test Exception" )));
}

#[test]
fn attempt_with_success_skips_handler() {
	let probe = Probe::default();
	let outcome = attempt_with(|| 42, | fault | { probe.hit(); TestError::new( 1, fault.panic_message() )});
	assert_eq!( outcome, Outcome::Success( 42 ));
	assert_not_called!( probe );
}

#[test]
#[should_panic( expected = "handler failed" )]
fn attempt_with_panicking_handler_is_not_captured() {
	let _ = attempt_with(|| -> i32 { panic!( "Test Exception" ) }, | _ | -> TestError { panic!( "handler failed" ) });
}

#[test]
fn attempt_feeds_a_pipeline() {
	let parsed: Outcome<i32> = attempt(|| "12".parse::<i32>().expect( "valid number" ));
	assert_eq!( parsed.map(| value | value * 2 ).or_else( 0 ), 24 );
	let broken: Outcome<i32> = attempt(|| "twelve".parse::<i32>().expect( "valid number" ));
	assert_eq!( broken.map(| value | value * 2 ).or_else( 0 ), 0 );
}
