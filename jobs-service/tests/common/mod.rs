use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Claims;
use auth::JwtHandler;
use auth::TokenCodec;
use jobs_service::domain::job::errors::JobError;
use jobs_service::domain::job::models::Job;
use jobs_service::domain::job::ports::JobRepository;
use jobs_service::domain::job::service::JobService;
use jobs_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Job store kept in memory so the HTTP flow runs without Postgres.
#[derive(Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepository {
    pub fn count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn find_all(&self) -> Result<Vec<Job>, JobError> {
        let mut jobs = self.jobs.lock().unwrap().clone();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn create(&self, job: Job) -> Result<Job, JobError> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryJobRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryJobRepository::default());
        let job_service = Arc::new(JobService::new(Arc::clone(&repository)));
        let token_codec = Arc::new(JwtHandler::new(TEST_SECRET));

        let router = create_router(job_service, token_codec);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Sign a token the way auth-service does at login.
    pub fn token(&self) -> String {
        let claims = Claims::for_user("user-1", "test@example.com", "user", 24);
        self.jwt_handler
            .generate_token(&claims)
            .expect("Failed to sign token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }
}
