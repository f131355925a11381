use serde::Deserialize;

use crate::{
    errors::{msg, Error, ErrorKind},
    metrics::{build_metric, Metric, MetricConfig},
};

/// A profile request exactly as it arrives, before any metric has been built.
#[derive(Debug, Deserialize)]
pub struct PrimitiveRequest {
    pub table: String,
    pub metrics: Vec<MetricConfig>,
}

/// A table and the fully configured metrics to compute over it.
#[derive(Debug)]
pub struct ProfileRequest {
    pub table: String,
    pub metrics: Vec<Box<dyn Metric>>,
}

impl ProfileRequest {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let primitive = serde_json::from_str::<PrimitiveRequest>(json).map_err(|e| {
            Error::new(ErrorKind::InvalidRequest(msg::invalid_request(&e.to_string())))
        })?;
        ProfileRequest::try_from(primitive)
    }
}

impl TryFrom<PrimitiveRequest> for ProfileRequest {
    type Error = Error;

    fn try_from(primitive: PrimitiveRequest) -> Result<Self, Self::Error> {
        if primitive.metrics.is_empty() {
            return Err(Error::new(ErrorKind::InvalidRequest(msg::no_metrics())));
        }
        let metrics = primitive
            .metrics
            .iter()
            .map(build_metric)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ProfileRequest {
            table: primitive.table,
            metrics,
        })
    }
}
