use newsverify_core::VerifyError;

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// On timeout this returns `VerifyError::RequestTimeout` labelled `"request"`;
/// call sites remap it to a more specific capability label as needed.
///
/// # Errors
/// Returns `RequestTimeout` if `deadline` elapses before every task completes.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, VerifyError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}
