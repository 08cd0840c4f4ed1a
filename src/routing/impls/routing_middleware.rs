use crate::routing::enums::routing_error::RoutingError;
use crate::routing::structs::effective_host::EffectiveHost;
use crate::routing::structs::routing_middleware::{RoutingMiddleware, RoutingMiddlewareService};
use crate::routing::structs::routing_resolver::RoutingResolver;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use log::warn;
use std::rc::Rc;
use std::sync::Arc;

impl RoutingMiddleware {
    pub fn new(resolver: Arc<RoutingResolver>) -> Self {
        Self { resolver }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoutingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = RoutingMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoutingMiddlewareService {
            service: Rc::new(service),
            resolver: self.resolver.clone(),
        }))
    }
}

impl<S, B> Service<ServiceRequest> for RoutingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let resolver = self.resolver.clone();
        Box::pin(async move {
            let incoming_host = request_host(&req);
            let effective_host = match resolver.resolve_host(&incoming_host).await {
                Ok(effective_host) => effective_host,
                Err(e) => {
                    warn!("[ROUTING] Unable to resolve host {}: {}", incoming_host, e);
                    return Err(actix_web::Error::from(e));
                }
            };
            if effective_host != incoming_host {
                let value = match HeaderValue::from_str(&effective_host) {
                    Ok(value) => value,
                    Err(_) => return Err(actix_web::Error::from(RoutingError::InvalidHost(effective_host))),
                };
                req.headers_mut().insert(header::HOST, value);
                req.extensions_mut().insert(EffectiveHost(effective_host));
            }
            service.call(req).await
        })
    }
}

/// Host header first, then the URI authority. Missing both yields an empty host.
pub fn request_host(req: &ServiceRequest) -> String {
    if let Some(host) = req.headers().get(header::HOST).and_then(|value| value.to_str().ok()) {
        return host.to_string();
    }
    req.uri()
        .authority()
        .map(|authority| authority.as_str().to_string())
        .unwrap_or_default()
}
