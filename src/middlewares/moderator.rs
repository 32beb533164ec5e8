use crate::{error, jwt::Claims, StateTrait};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use entity::users;
use futures::{future::BoxFuture, Future};
use sea_orm::EntityTrait;
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// Rejects requests whose caller is neither staff nor superuser.
#[derive(Debug, Clone)]
pub struct ModeratorLayer<ST> {
    state: ST,
}

impl<ST> ModeratorLayer<ST> {
    pub fn new(state: ST) -> Self {
        Self { state }
    }
}

impl<S, ST> Layer<S> for ModeratorLayer<ST>
where
    ST: Clone,
{
    type Service = Moderator<S, ST>;

    fn layer(&self, inner: S) -> Self::Service {
        Moderator::new(self.state.clone(), inner)
    }
}

#[derive(Debug, Clone)]
pub struct Moderator<S, ST> {
    state: ST,
    inner: S,
}

impl<S, ST> Moderator<S, ST> {
    fn new(state: ST, inner: S) -> Self {
        Moderator { state, inner }
    }
}

impl<S, B, ST> Service<Request<B>> for Moderator<S, ST>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Future + Send + 'static,
    B: Send + 'static,
    ST: StateTrait,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(user_id) = req.extensions().get::<Claims>().map(|claims| claims.user_id) else {
            return Box::pin(async { Ok(error::COULD_NOT_GET_CLAIMS.into_response()) });
        };

        let state = self.state.clone();
        let future = self.inner.call(req);

        Box::pin(async move {
            let user = match users::Entity::find_by_id(user_id).one(state.db()).await {
                Ok(user) => user,
                Err(err) => {
                    error!("failed to load user for permission check: {:?}", err);
                    return Ok(error::DATABASE_ERROR.into_response());
                }
            };

            let Some(user) = user else {
                warn!(user_id, "token for unknown user");
                return Ok(error::UNKNOWN_USER.into_response());
            };

            if !user.is_moderator() {
                debug!(user_id, "moderator permission denied");
                return Ok(error::NOT_MODERATOR.into_response());
            }

            future.await
        })
    }
}
