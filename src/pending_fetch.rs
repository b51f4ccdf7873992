pub(crate) struct PendingFetch {
  pub(crate) city: String,
  pub(crate) request_id: u64,
}
