use crate::error::{GatewayError, SubmitFailure};
use crate::tracker::{LeaderSnapshot, LeaderSubscriber, PublishedLeader};
use crate::types::{Argument, SubmitRequest, SubmitResponse};
use std::sync::Arc;
use tokio::time::Duration;

/// RequestSubmitter sends named operations to whichever leader is current when the call starts.
///
/// A request keeps using the connection it started on, even if the leader changes while it is in
/// flight. It then completes, times out, or fails on that connection. With
/// `cancel_in_flight_on_swap` it instead fails as soon as that connection is retired.
#[derive(Clone)]
pub(crate) struct RequestSubmitter {
    logger: slog::Logger,
    leader: LeaderSubscriber,
    submit_timeout: Duration,
    leader_wait_timeout: Option<Duration>,
    cancel_in_flight_on_swap: bool,
}

impl RequestSubmitter {
    pub(crate) fn new(
        logger: slog::Logger,
        leader: LeaderSubscriber,
        submit_timeout: Duration,
        leader_wait_timeout: Option<Duration>,
        cancel_in_flight_on_swap: bool,
    ) -> Self {
        RequestSubmitter {
            logger,
            leader,
            submit_timeout,
            leader_wait_timeout,
            cancel_in_flight_on_swap,
        }
    }

    pub(crate) async fn submit<T>(&self, operation: &str, arguments: Vec<Argument>) -> Result<T, GatewayError>
    where
        T: prost::Message + Default,
    {
        let snapshot = self.wait_for_leader(self.leader_wait_timeout).await?;

        let request = SubmitRequest::new(operation, arguments);
        let request_id = request.id.clone();
        slog::debug!(
            self.logger,
            "Sending {} ({}) to {} term {:?}",
            operation,
            request_id,
            snapshot.member,
            snapshot.term
        );

        let response = self.send(&snapshot, request).await?;

        T::decode(response.result).map_err(|e| {
            slog::warn!(self.logger, "Undecodable result for {} ({}): {}", operation, request_id, e);
            GatewayError::failed(request_id, e)
        })
    }

    /// Suspends until a leader is known. Waits forever when `deadline` is `None`.
    pub(crate) async fn wait_for_leader(&self, deadline: Option<Duration>) -> Result<Arc<LeaderSnapshot>, GatewayError> {
        let mut leader = self.leader.clone();
        match leader.current() {
            PublishedLeader::Elected(snapshot) => return Ok(snapshot),
            PublishedLeader::Closed => return Err(GatewayError::GatewayClosed),
            PublishedLeader::NotElected => {}
        }

        slog::info!(self.logger, "No leader in cluster, waiting for election.");

        let elected = match deadline {
            Some(deadline) => tokio::time::timeout(deadline, leader.elected())
                .await
                .map_err(|_| GatewayError::NoLeaderAvailable(deadline))?,
            None => leader.elected().await,
        };

        elected.ok_or(GatewayError::GatewayClosed)
    }

    async fn send(&self, snapshot: &LeaderSnapshot, request: SubmitRequest) -> Result<SubmitResponse, GatewayError> {
        let request_id = request.id.clone();
        let in_flight = tokio::time::timeout(self.submit_timeout, snapshot.connection.submit(request));

        let result = if self.cancel_in_flight_on_swap {
            tokio::select! {
                result = in_flight => result,
                _ = snapshot.connection.retired() => {
                    slog::warn!(self.logger, "Leader {} replaced while {} in flight", snapshot.member, request_id);
                    return Err(GatewayError::failed(request_id, SubmitFailure::Superseded));
                }
            }
        } else {
            in_flight.await
        };

        match result {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => {
                slog::warn!(self.logger, "Request {} to {} failed: {}", request_id, snapshot.member, e);
                Err(GatewayError::failed(request_id, e))
            }
            Err(_) => {
                slog::warn!(
                    self.logger,
                    "Request {} to {} timed out after {:?}",
                    request_id,
                    snapshot.member,
                    self.submit_timeout
                );
                Err(GatewayError::SubmissionTimeout {
                    request_id,
                    timeout: self.submit_timeout,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionManager;
    use crate::store::TableNames;
    use crate::test_utils::{encode, member, test_logger, MockTransport, Reply};
    use crate::tracker::LeaderTracker;
    use crate::transport::TransportError;
    use crate::types::Term;
    use bytes::Bytes;
    use std::collections::HashSet;

    struct Setup {
        transport: MockTransport,
        tracker: Arc<LeaderTracker>,
        submitter: RequestSubmitter,
    }

    fn setup(submit_timeout: Duration, leader_wait_timeout: Option<Duration>, cancel_in_flight_on_swap: bool) -> Setup {
        let logger = test_logger();
        let transport = MockTransport::new();
        let connections = ConnectionManager::new(logger.clone(), Arc::new(transport.clone()));
        let tracker = Arc::new(LeaderTracker::new(logger.clone(), connections));
        let submitter = RequestSubmitter::new(
            logger,
            tracker.subscriber(),
            submit_timeout,
            leader_wait_timeout,
            cancel_in_flight_on_swap,
        );

        Setup {
            transport,
            tracker,
            submitter,
        }
    }

    fn default_setup() -> Setup {
        setup(Duration::from_millis(2000), None, false)
    }

    fn table_names(names: &[&str]) -> TableNames {
        TableNames {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn submit_blocks_until_leader_known() {
        let s = default_setup();
        s.transport.reply_with("listTables", &table_names(&["t1"]));

        let call = {
            let submitter = s.submitter.clone();
            tokio::spawn(async move { submitter.submit::<TableNames>("listTables", Vec::new()).await })
        };

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(s.transport.requests().is_empty());

        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), call)
            .await
            .expect("Unexpected timeout")
            .unwrap()
            .unwrap();
        assert_eq!(result, table_names(&["t1"]));
        assert_eq!(
            s.transport.events().last().cloned(),
            Some(crate::test_utils::TransportEvent::Submitted {
                member: "a".into(),
                operation: "listTables".into(),
            })
        );
    }

    #[tokio::test]
    async fn request_carries_operation_and_arguments() {
        let s = default_setup();
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        s.submitter
            .submit::<crate::store::Empty>("createTable", vec![Argument::from("t1"), Argument::from(100i64)])
            .await
            .unwrap();

        let requests = s.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].operation, "createTable");
        assert_eq!(requests[0].arguments, vec![Argument::from("t1"), Argument::Integer(100)]);
    }

    #[tokio::test]
    async fn leader_wait_deadline_elapses() {
        let s = setup(Duration::from_millis(2000), Some(Duration::from_millis(50)), false);

        let result = s.submitter.submit::<TableNames>("listTables", Vec::new()).await;

        match result {
            Err(GatewayError::NoLeaderAvailable(waited)) => assert_eq!(waited, Duration::from_millis(50)),
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(s.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn unanswered_request_times_out() {
        let s = setup(Duration::from_millis(100), None, false);
        s.transport.reply("createTable", Reply::Hang);
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            s.submitter.submit::<TableNames>("createTable", vec![Argument::from("t1")]),
        )
        .await
        .expect("Submit must not hang");

        match result {
            Err(e @ GatewayError::SubmissionTimeout { .. }) => assert!(e.may_have_executed()),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn transport_error_is_submission_failed() {
        let s = default_setup();
        s.transport.reply("dropTable", Reply::Failure("connection reset".into()));
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        let result = s
            .submitter
            .submit::<crate::store::Empty>("dropTable", vec![Argument::from("t1")])
            .await;

        match result {
            Err(GatewayError::SubmissionFailed {
                cause: SubmitFailure::Transport(TransportError::Remote { message }),
                ..
            }) => assert_eq!(message, "connection reset"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn undecodable_result_is_submission_failed() {
        let s = default_setup();
        s.transport
            .reply("listTables", Reply::Payload(Bytes::from_static(&[0xFF, 0xFF])));
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        let result = s.submitter.submit::<TableNames>("listTables", Vec::new()).await;

        assert!(matches!(
            result,
            Err(GatewayError::SubmissionFailed {
                cause: SubmitFailure::Decode(_),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn in_flight_request_finishes_on_replaced_leader() {
        let s = default_setup();
        s.transport.reply(
            "listTables",
            Reply::DelayedPayload(Duration::from_millis(200), encode(&table_names(&["t1"]))),
        );
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        let call = {
            let submitter = s.submitter.clone();
            tokio::spawn(async move { submitter.submit::<TableNames>("listTables", Vec::new()).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        s.tracker.on_leader_notification(member("b"), Term::new(2)).await.unwrap();

        let result = call.await.unwrap().unwrap();
        assert_eq!(result, table_names(&["t1"]));
        assert_eq!(s.transport.closed(), vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn in_flight_request_cancelled_on_swap_when_enabled() {
        let s = setup(Duration::from_millis(2000), None, true);
        s.transport.reply("listTables", Reply::Hang);
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        let call = {
            let submitter = s.submitter.clone();
            tokio::spawn(async move { submitter.submit::<TableNames>("listTables", Vec::new()).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        s.tracker.on_leader_notification(member("b"), Term::new(2)).await.unwrap();

        let result = tokio::time::timeout(Duration::from_millis(500), call)
            .await
            .expect("Cancellation should beat the submit timeout")
            .unwrap();
        assert!(matches!(
            result,
            Err(GatewayError::SubmissionFailed {
                cause: SubmitFailure::Superseded,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn new_requests_go_to_new_leader() {
        let s = default_setup();
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();
        s.submitter.submit::<TableNames>("listTables", Vec::new()).await.unwrap();

        s.tracker.on_leader_notification(member("b"), Term::new(2)).await.unwrap();
        s.submitter.submit::<TableNames>("listTables", Vec::new()).await.unwrap();

        let submitted_to: Vec<String> = s
            .transport
            .events()
            .into_iter()
            .filter_map(|e| match e {
                crate::test_utils::TransportEvent::Submitted { member, .. } => Some(member),
                _ => None,
            })
            .collect();
        assert_eq!(submitted_to, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn shutdown_fails_waiting_and_new_requests() {
        let s = default_setup();

        let call = {
            let submitter = s.submitter.clone();
            tokio::spawn(async move { submitter.submit::<TableNames>("listTables", Vec::new()).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        s.tracker.shutdown().await;

        assert!(matches!(call.await.unwrap(), Err(GatewayError::GatewayClosed)));
        assert!(matches!(
            s.submitter.submit::<TableNames>("listTables", Vec::new()).await,
            Err(GatewayError::GatewayClosed)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_submits_are_independent() {
        let s = default_setup();
        s.transport.reply_with("listTables", &table_names(&["t1", "t2"]));

        let mut calls = Vec::new();
        for _ in 0..50 {
            let submitter = s.submitter.clone();
            calls.push(tokio::spawn(async move {
                submitter.submit::<TableNames>("listTables", Vec::new()).await
            }));
        }
        s.tracker.on_leader_notification(member("a"), Term::new(1)).await.unwrap();

        for call in calls {
            assert_eq!(call.await.unwrap().unwrap(), table_names(&["t1", "t2"]));
        }

        let ids: HashSet<_> = s.transport.requests().into_iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 50);
    }
}
