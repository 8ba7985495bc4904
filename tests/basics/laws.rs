use outcome::Outcome ;

use crate::{ Probe, TestError };

fn half( value: i32 ) -> Outcome<i32, TestError> {
	match value % 2 {
		0 => Outcome::Success( value / 2 ),
		_ => Outcome::fail( TestError::new( 1, format!( "{} is odd", value ))),
	}
}

fn decrement( value: i32 ) -> Outcome<i32, TestError> {
	match value > 0 {
		true => Outcome::Success( value - 1 ),
		false => Outcome::fail( TestError::new( 2, "negative" )),
	}
}

fn samples() -> Vec<Outcome<i32, TestError>> {
	vec![
		Outcome::Success( 0 ),
		Outcome::Success( 4 ),
		Outcome::Success( 6 ),
		Outcome::Success( 7 ),
		Outcome::fail( TestError::new( 9, "given" )),
		Outcome::Failure( vec![] ),
	]
}

#[test]
fn left_identity() {
	for value in [ 0, 1, 2, 8, -4 ] {
		assert_eq!( Outcome::success( value ).bind( half ), half( value ));
	}
}

#[test]
fn right_identity() {
	for outcome in samples() {
		assert_eq!( outcome.clone().map(| value | value ), outcome );
		assert_eq!( outcome.clone().bind( Outcome::success ), outcome );
	}
}

#[test]
fn associativity() {
	for outcome in samples() {
		let nested = outcome.clone().bind( half ).bind( decrement );
		let flat = outcome.bind(| value | half( value ).bind( decrement ));
		assert_eq!( nested, flat );
	}
}

#[test]
fn failure_short_circuits_every_step() {
	let probe = Probe::default();
	let errors = vec![ TestError::new( 1, "first" ), TestError::new( 2, "second" )];
	let outcome = Outcome::<i32, _>::Failure( errors.clone() )
		.map(| value | { probe.hit(); value + 1 })
		.bind(| value | { probe.hit(); Outcome::Success( value * 2 ) })
		.select_many(| _ | { probe.hit(); Outcome::Success( 1 ) }, | a, b | a + b );
	assert_eq!( outcome, Outcome::Failure( errors ));
	assert_not_called!( probe );
}
