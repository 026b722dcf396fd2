mod managed;

pub(crate) use managed::ConnectionManager;
pub(crate) use managed::ManagedConnection;
