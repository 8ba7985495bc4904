//! Combinators for pipelines that contain pending computations.
//!
//! Two shapes are covered. Methods on [`Outcome`] ending in `_async` take a
//! transform that returns a future; the branch is decided straight away and a
//! failure resolves immediately without calling the transform. The
//! [`PendingOutcome`] extension trait covers futures that resolve to an
//! [`Outcome`]: it awaits the receiver, then applies the synchronous
//! combinator, or the `_async` one when the transform is itself asynchronous.
//!
//! Nothing here captures an execution context. The returned futures resume on
//! whichever executor polls them, and are `Send` whenever their captures are.
//! Dropping one cancels the pipeline; no failure is synthesised for it.
//!
//! ```
//! # use outcome::{ Outcome, PendingOutcome };
//! # futures::executor::block_on( async {
//! let length = async { Outcome::<_, String>::Success( "forty-two" ) }
//! 	.map(| text | text.len() )
//! 	.bind_async(| length | async move { Outcome::Success( length * 2 ) })
//! 	.await ;
//! assert_eq!( length, Outcome::Success( 18 ));
//! # });
//! ```

use std::future::Future ;
use futures::future::{ ready, Either };
use pipe_trait::Pipe ;

use crate::Outcome ;



/// Awaits `pending`, then applies a synchronous step.
async fn after<P: Future, R>( pending: P, step: impl FnOnce( P::Output ) -> R ) -> R {
	pending.await.pipe( step )
}

/// Awaits `pending`, then applies and awaits an asynchronous step.
async fn after_async<P: Future, S: Future>( pending: P, step: impl FnOnce( P::Output ) -> S ) -> S::Output {
	pending.await.pipe( step ).await
}

impl<T, E> Outcome<T, E> {

	/// [`bind`]( Outcome::bind ) with an asynchronous binder.
	///
	/// On failure the returned future is already complete and `bind` is never
	/// called.
	pub fn bind_async<U, F>( self, bind: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = Outcome<U, E>>,
	{
		self.fold(
			| value | Either::Left( async move { bind( value ).await }),
			| errors | {
				log::trace!( "skipping asynchronous step: outcome already failed with {} error(s)", errors.len() );
				Either::Right( ready( Outcome::Failure( errors )))
			},
		)
	}

	/// [`map`]( Outcome::map ) with an asynchronous mapping.
	pub fn map_async<U, F>( self, map: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = U>,
	{
		self.bind_async( move | value | async move { Outcome::Success( map( value ).await )})
	}

	/// Alias of [`map_async`]( Outcome::map_async ).
	#[inline]
	pub fn select_async<U, F>( self, select: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = U>,
	{
		self.map_async( select )
	}

	/// Alias of [`bind_async`]( Outcome::bind_async ).
	#[inline]
	pub fn flat_map_async<U, F>( self, flat_map: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = Outcome<U, E>>,
	{
		self.bind_async( flat_map )
	}

	/// [`fold`]( Outcome::fold ) with asynchronous handlers. Only the handler
	/// for the held variant is called and awaited.
	pub fn fold_async<R, S, F>(
		self,
		on_success: impl FnOnce( T ) -> S,
		on_failure: impl FnOnce( Vec<E> ) -> F,
	) -> impl Future<Output = R>
	where
		S: Future<Output = R>,
		F: Future<Output = R>,
	{
		self.fold(
			| value | Either::Left( async move { on_success( value ).await }),
			| errors | Either::Right( async move { on_failure( errors ).await }),
		)
	}

	/// [`dispatch`]( Outcome::dispatch ) with asynchronous handlers.
	pub fn dispatch_async<S, F>(
		self,
		on_success: impl FnOnce( T ) -> S,
		on_failure: impl FnOnce( Vec<E> ) -> F,
	) -> impl Future<Output = ()>
	where
		S: Future<Output = ()>,
		F: Future<Output = ()>,
	{
		self.fold_async( on_success, on_failure )
	}

	/// [`or_else_with`]( Outcome::or_else_with ) with an asynchronous fallback.
	pub fn or_else_with_async<F>( self, fallback: impl FnOnce() -> F ) -> impl Future<Output = T>
	where
		F: Future<Output = T>,
	{
		self.or_else_recover_async( move |_| fallback() )
	}

	/// [`or_else_recover`]( Outcome::or_else_recover ) with an asynchronous recovery.
	pub fn or_else_recover_async<F>( self, recover: impl FnOnce( Vec<E> ) -> F ) -> impl Future<Output = T>
	where
		F: Future<Output = T>,
	{
		self.fold(
			| value | Either::Left( ready( value )),
			| errors | Either::Right( async move { recover( errors ).await }),
		)
	}

	/// [`select_many`]( Outcome::select_many ) with an asynchronous binder.
	///
	/// The future returned by `bind` cannot borrow the first value; copy or
	/// clone what it needs out of the reference before the `async move` block.
	///
	/// ```
	/// # use outcome::Outcome ;
	/// # futures::executor::block_on( async {
	/// let outcome = Outcome::<_, String>::Success( "Test".to_string() )
	/// 	.select_many_async(
	/// 		| text | { let length = text.len(); async move { Outcome::Success( length ) }},
	/// 		| text, length | format!( "{}{}", text, length ),
	/// 	)
	/// 	.await ;
	/// assert_eq!( outcome, Outcome::Success( "Test4".to_string() ));
	/// # });
	/// ```
	pub fn select_many_async<U, V, F>(
		self,
		bind: impl FnOnce( &T ) -> F,
		project: impl FnOnce( T, U ) -> V,
	) -> impl Future<Output = Outcome<V, E>>
	where
		F: Future<Output = Outcome<U, E>>,
	{
		self.bind_async( move | first | async move {
			bind( &first ).await.map(| second | project( first, second ))
		})
	}

}

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Implemented for every such future. The receiver is awaited first; the step
/// then behaves exactly like its synchronous counterpart on [`Outcome`].
///
/// The method names match the ones on [`Outcome`], so `futures::FutureExt`
/// should not be glob-imported alongside this trait where `map` is used.
pub trait PendingOutcome<T, E>: Future<Output = Outcome<T, E>> + Sized {

	/// Awaits, then [`map`]( Outcome::map ).
	fn map<U>( self, map: impl FnOnce( T ) -> U ) -> impl Future<Output = Outcome<U, E>> {
		after( self, move | outcome | outcome.map( map ))
	}

	/// Awaits, then [`map_async`]( Outcome::map_async ).
	fn map_async<U, F>( self, map: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = U>,
	{
		after_async( self, move | outcome | outcome.map_async( map ))
	}

	/// Alias of [`PendingOutcome::map`].
	fn select<U>( self, select: impl FnOnce( T ) -> U ) -> impl Future<Output = Outcome<U, E>> {
		self.map( select )
	}

	/// Alias of [`PendingOutcome::map_async`].
	fn select_async<U, F>( self, select: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = U>,
	{
		self.map_async( select )
	}

	/// Awaits, then [`bind`]( Outcome::bind ).
	fn bind<U>( self, bind: impl FnOnce( T ) -> Outcome<U, E> ) -> impl Future<Output = Outcome<U, E>> {
		after( self, move | outcome | outcome.bind( bind ))
	}

	/// Awaits, then [`bind_async`]( Outcome::bind_async ).
	fn bind_async<U, F>( self, bind: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = Outcome<U, E>>,
	{
		after_async( self, move | outcome | outcome.bind_async( bind ))
	}

	/// Alias of [`PendingOutcome::bind`].
	fn flat_map<U>( self, flat_map: impl FnOnce( T ) -> Outcome<U, E> ) -> impl Future<Output = Outcome<U, E>> {
		self.bind( flat_map )
	}

	/// Alias of [`PendingOutcome::bind_async`].
	fn flat_map_async<U, F>( self, flat_map: impl FnOnce( T ) -> F ) -> impl Future<Output = Outcome<U, E>>
	where
		F: Future<Output = Outcome<U, E>>,
	{
		self.bind_async( flat_map )
	}

	/// Awaits, then [`fold`]( Outcome::fold ).
	fn fold<R>(
		self,
		on_success: impl FnOnce( T ) -> R,
		on_failure: impl FnOnce( Vec<E> ) -> R,
	) -> impl Future<Output = R> {
		after( self, move | outcome | outcome.fold( on_success, on_failure ))
	}

	/// Awaits, then [`fold_async`]( Outcome::fold_async ).
	fn fold_async<R, S, F>(
		self,
		on_success: impl FnOnce( T ) -> S,
		on_failure: impl FnOnce( Vec<E> ) -> F,
	) -> impl Future<Output = R>
	where
		S: Future<Output = R>,
		F: Future<Output = R>,
	{
		after_async( self, move | outcome | outcome.fold_async( on_success, on_failure ))
	}

	/// Awaits, then [`dispatch`]( Outcome::dispatch ).
	fn dispatch(
		self,
		on_success: impl FnOnce( T ),
		on_failure: impl FnOnce( Vec<E> ),
	) -> impl Future<Output = ()> {
		after( self, move | outcome | outcome.dispatch( on_success, on_failure ))
	}

	/// Awaits, then [`dispatch_async`]( Outcome::dispatch_async ).
	fn dispatch_async<S, F>(
		self,
		on_success: impl FnOnce( T ) -> S,
		on_failure: impl FnOnce( Vec<E> ) -> F,
	) -> impl Future<Output = ()>
	where
		S: Future<Output = ()>,
		F: Future<Output = ()>,
	{
		after_async( self, move | outcome | outcome.dispatch_async( on_success, on_failure ))
	}

	/// Awaits, then [`or_else`]( Outcome::or_else ).
	fn or_else( self, fallback: T ) -> impl Future<Output = T> {
		after( self, move | outcome | outcome.or_else( fallback ))
	}

	/// Awaits, then [`or_else_with`]( Outcome::or_else_with ).
	fn or_else_with( self, fallback: impl FnOnce() -> T ) -> impl Future<Output = T> {
		after( self, move | outcome | outcome.or_else_with( fallback ))
	}

	/// Awaits, then falls back to awaiting `fallback` on failure. `fallback`
	/// is dropped unpolled on success.
	fn or_else_future( self, fallback: impl Future<Output = T> ) -> impl Future<Output = T> {
		after_async( self, move | outcome | outcome.or_else_with_async( move || fallback ))
	}

	/// Awaits, then [`or_else_recover`]( Outcome::or_else_recover ).
	fn or_else_recover( self, recover: impl FnOnce( Vec<E> ) -> T ) -> impl Future<Output = T> {
		after( self, move | outcome | outcome.or_else_recover( recover ))
	}

	/// Awaits, then [`or_else_recover_async`]( Outcome::or_else_recover_async ).
	fn or_else_recover_async<F>( self, recover: impl FnOnce( Vec<E> ) -> F ) -> impl Future<Output = T>
	where
		F: Future<Output = T>,
	{
		after_async( self, move | outcome | outcome.or_else_recover_async( recover ))
	}

	/// Awaits, then [`select_many`]( Outcome::select_many ).
	fn select_many<U, V>(
		self,
		bind: impl FnOnce( &T ) -> Outcome<U, E>,
		project: impl FnOnce( T, U ) -> V,
	) -> impl Future<Output = Outcome<V, E>> {
		after( self, move | outcome | outcome.select_many( bind, project ))
	}

	/// Awaits, then [`select_many_async`]( Outcome::select_many_async ).
	/// The same borrowing restriction applies to `bind`.
	fn select_many_async<U, V, F>(
		self,
		bind: impl FnOnce( &T ) -> F,
		project: impl FnOnce( T, U ) -> V,
	) -> impl Future<Output = Outcome<V, E>>
	where
		F: Future<Output = Outcome<U, E>>,
	{
		after_async( self, move | outcome | outcome.select_many_async( bind, project ))
	}

}

impl<T, E, P> PendingOutcome<T, E> for P where P: Future<Output = Outcome<T, E>> {}
