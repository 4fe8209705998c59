use logsign_core::Result;

/// Build the GET request that downloads a complete RDS log file.
///
/// The host follows the `rds.<region>.amazonaws.com` endpoint template and the
/// path addresses the `downloadCompleteLogFile` API. Both the DB instance
/// identifier and the log file name are used as path segments verbatim; log
/// file names commonly contain slashes (`error/postgresql.log.2020-03-03-21`)
/// and keep them.
///
/// The returned parts are unsigned. Pass them through a
/// [`Signer`](logsign_core::Signer) configured with
/// [`RequestSigner`](crate::RequestSigner) to obtain a fetchable URL.
pub fn log_file_request(
    region: &str,
    db_instance_identifier: &str,
    log_file_name: &str,
) -> Result<http::request::Parts> {
    let uri = format!(
        "https://rds.{region}.amazonaws.com/v13/downloadCompleteLogFile/{db_instance_identifier}/{log_file_name}"
    );

    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(())?;

    Ok(req.into_parts().0)
}
