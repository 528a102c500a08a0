#[macro_export]
macro_rules! post {
    ($client:expr, $token:expr, $url:expr, $body:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .post($url)
            .default_headers($token)
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}
