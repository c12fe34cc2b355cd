//! Acceptance tests for the CloudFront-fronted private-bucket lab.

#[cfg(test)]
mod tests {
    use hostcheck_checks::CheckId;

    use crate::run;

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_have_a_proper_cf_bucket_name() {
        run(CheckId::CfBucketName).await;
    }

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_deny_direct_access_to_index_file() {
        run(CheckId::NoPublicFiles).await;
    }

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_have_a_generated_cloudfront_domain_name() {
        run(CheckId::CfDomainName).await;
    }

    #[tokio::test]
    #[ignore = "requires deployed AWS resources"]
    async fn test_should_deliver_content_through_cloudfront() {
        run(CheckId::CloudFrontDeployment).await;
    }
}
