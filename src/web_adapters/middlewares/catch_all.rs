//! Last line of defence for every route: panics and 5xx service errors are
//! logged and replaced by the fixed internal-error body, so no detail of the
//! original failure reaches the client.

use std::{
    future::{ready, Ready},
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error,
};
use futures::{future::LocalBoxFuture, FutureExt};
use tracing::{event, Level};

use crate::utils::response_500;

pub struct CatchAll;

impl<S: 'static, B> Transform<S, ServiceRequest> for CatchAll
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CatchAllMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CatchAllMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct CatchAllMiddleware<S> {
    service: Rc<S>,
}

/// The request is gone once the inner service took it, so failures outside a
/// response are rendered by actix from this error.
fn internal_error<T: std::fmt::Debug>(detail: T) -> Error {
    InternalError::from_response("internal server error", response_500(detail)).into()
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

impl<S, B> Service<ServiceRequest> for CatchAllMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = match panic::catch_unwind(AssertUnwindSafe(|| self.service.call(req))) {
            Ok(fut) => fut,
            Err(panic) => {
                let message = panic_message(&*panic);
                event!(target: "backend", Level::ERROR, "Service panicked: {}", message);
                return Box::pin(ready(Err(internal_error("panic recovered by CatchAll"))));
            }
        };

        Box::pin(async move {
            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(Ok(res)) => {
                    let detail = match res.response().error() {
                        Some(e) if res.status().is_server_error() => Some(format!("{:?}", e)),
                        _ => None,
                    };
                    match detail {
                        Some(detail) => Ok(res
                            .into_response(response_500(detail))
                            .map_into_right_body()),
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Ok(Err(e)) if e.as_response_error().status_code().is_server_error() => {
                    Err(internal_error(&e))
                }
                Ok(Err(e)) => Err(e),
                Err(panic) => {
                    let message = panic_message(&*panic);
                    event!(target: "backend", Level::ERROR, "Handler panicked: {}", message);
                    Err(internal_error("panic recovered by CatchAll"))
                }
            }
        })
    }
}
