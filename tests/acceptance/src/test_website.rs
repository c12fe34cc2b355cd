//! Acceptance tests for the direct-bucket + static-website-hosting lab.

#[cfg(test)]
mod tests {
    use hostcheck_checks::CheckId;

    use crate::run;

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_have_a_valid_aws_account_id() {
        run(CheckId::AwsAccount).await;
    }

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_serve_uploaded_files_publicly() {
        run(CheckId::UploadedFiles).await;
    }

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_serve_error_page_for_missing_paths() {
        run(CheckId::StaticHosting).await;
    }

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_deploy_web_application_in_user_bucket() {
        run(CheckId::WebApplication).await;
    }
}
