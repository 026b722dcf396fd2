use std::convert::TryFrom;
use tokio::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct GatewayOptions {
    /// How long a submitted request may wait for its response. Defaults to 2 seconds.
    pub submit_timeout: Option<Duration>,
    /// How long a request may wait for a leader to be elected. Defaults to waiting forever.
    pub leader_wait_timeout: Option<Duration>,
    /// Fail requests still in flight to a leader once it has been replaced, instead of letting
    /// them run against the old connection. Defaults to false.
    pub cancel_in_flight_on_swap: Option<bool>,
}

#[derive(Debug)]
pub(super) struct GatewayOptionsValidated {
    pub submit_timeout: Duration,
    pub leader_wait_timeout: Option<Duration>,
    pub cancel_in_flight_on_swap: bool,
}

impl GatewayOptionsValidated {
    fn validate(&self) -> Result<(), &'static str> {
        if self.submit_timeout == Duration::from_millis(0) {
            return Err("Submit timeout must be greater than zero");
        }
        if self.leader_wait_timeout == Some(Duration::from_millis(0)) {
            return Err("Leader wait timeout must be greater than zero, or unset to wait forever");
        }

        Ok(())
    }
}

impl TryFrom<GatewayOptions> for GatewayOptionsValidated {
    type Error = &'static str;

    fn try_from(options: GatewayOptions) -> Result<Self, Self::Error> {
        let values = GatewayOptionsValidated {
            submit_timeout: options.submit_timeout.unwrap_or(Duration::from_millis(2000)),
            leader_wait_timeout: options.leader_wait_timeout,
            cancel_in_flight_on_swap: options.cancel_in_flight_on_swap.unwrap_or(false),
        };

        values.validate()?;
        Ok(values)
    }
}
