//! Remote-delegating calculation strategy
//!
//! The crate defines no HTTP client. Deployments that delegate to a
//! remote calculation service supply the transport (POST the profile
//! payload, return the response body); retry, backoff, and timeout live
//! in that collaborator, never here.

use super::wire::{WireProfile, WireResult};
use super::PensionCalculator;
use crate::profile::PensionProfile;
use crate::projection::{CalculationError, ProjectionResult};

/// One round-trip to the remote calculation service
pub trait CalculationTransport {
    /// Send the profile payload, return the raw JSON response body
    fn send(&self, payload: &str) -> Result<String, CalculationError>;
}

/// Delegates calculations to a remote service through a transport
#[derive(Debug, Clone)]
pub struct RemoteCalculator<T: CalculationTransport> {
    transport: T,
}

impl<T: CalculationTransport> RemoteCalculator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: CalculationTransport> PensionCalculator for RemoteCalculator<T> {
    fn calculate(&self, profile: &PensionProfile) -> Result<ProjectionResult, CalculationError> {
        let payload = serde_json::to_string(&WireProfile::from(profile)).map_err(|e| {
            CalculationError::Unavailable {
                reason: format!("failed to encode request: {}", e),
            }
        })?;

        let body = self.transport.send(&payload)?;

        let wire: WireResult =
            serde_json::from_str(&body).map_err(|e| CalculationError::Unavailable {
                reason: format!("unparseable service response: {}", e),
            })?;

        Ok(wire.into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;

    /// Transport double that captures the payload and replays a canned body
    struct FixedTransport {
        response: Result<String, CalculationError>,
    }

    impl CalculationTransport for FixedTransport {
        fn send(&self, payload: &str) -> Result<String, CalculationError> {
            // The outbound payload must be the camelCase wire shape
            let value: serde_json::Value = serde_json::from_str(payload).unwrap();
            assert!(value.get("grossSalary").is_some());
            self.response.clone()
        }
    }

    fn profile() -> PensionProfile {
        let mut profile = PensionProfile::new(30, Gender::Male, 5000.0, 2020);
        profile.work_end_year = Some(2060);
        profile
    }

    #[test]
    fn test_remote_maps_response_into_result() {
        let body = r#"{
            "real_amount": 1952.0,
            "inflation_adjusted_amount": 822.5,
            "replacement_rate": 39.04,
            "average_pension_comparison": 78.08,
            "delayed_retirement_scenarios": {
                "one_year": { "amount": 2108.16, "increase": 156.16 },
                "two_years": { "amount": 2264.32, "increase": 312.32 },
                "five_years": { "amount": 2732.8, "increase": 780.8 }
            },
            "funds_growth_timeline": []
        }"#;

        let calculator = RemoteCalculator::new(FixedTransport {
            response: Ok(body.to_string()),
        });

        let result = calculator.calculate(&profile()).unwrap();
        assert_eq!(result.real_amount, 1952);
        assert_eq!(result.inflation_adjusted_amount, 823);
        assert_eq!(result.delayed_retirement_scenarios.one_year.amount, 2108);
    }

    #[test]
    fn test_transport_failure_propagates_as_unavailable() {
        let calculator = RemoteCalculator::new(FixedTransport {
            response: Err(CalculationError::Unavailable {
                reason: "connection refused".to_string(),
            }),
        });

        let err = calculator.calculate(&profile()).unwrap_err();
        assert!(matches!(err, CalculationError::Unavailable { .. }));
    }

    #[test]
    fn test_garbage_response_is_unavailable_not_zero_result() {
        let calculator = RemoteCalculator::new(FixedTransport {
            response: Ok("<html>504 Gateway Timeout</html>".to_string()),
        });

        let err = calculator.calculate(&profile()).unwrap_err();
        assert!(matches!(err, CalculationError::Unavailable { .. }));
    }
}
