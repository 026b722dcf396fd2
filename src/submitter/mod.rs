mod request_submitter;

pub(crate) use request_submitter::RequestSubmitter;
