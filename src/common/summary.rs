/// Running summary of a paginated read or a chunked batch operation.
///
/// One summary is created per invocation and updated after every call to the
/// store. Progress callbacks receive the current state after each call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Number of calls issued to the store so far, remainder retries included.
    pub api_call_count: usize,
    /// Sum of the capacity units reported by the store.
    ///
    /// Stays at zero unless consumed capacity reporting is requested.
    pub consumed_capacity: f64,
    /// Number of items (or keys) handed to the operation.
    pub in_item_count: usize,
    /// Number of items returned by the store so far.
    pub out_item_count: usize,
    /// The table the operation runs against.
    pub table_name: String,
}

impl Summary {
    pub(crate) fn new(table_name: impl Into<String>, in_item_count: usize) -> Self {
        Self {
            in_item_count,
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    pub(crate) fn record_call(&mut self, consumed_capacity: f64, out_item_count: usize) {
        self.api_call_count += 1;
        self.consumed_capacity += consumed_capacity;
        self.out_item_count += out_item_count;
    }
}
