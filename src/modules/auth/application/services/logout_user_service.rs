use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{LogoutUserError, LogoutUserUseCase},
    outgoing::{SessionStore, SessionToken},
};

#[derive(Clone)]
pub struct LogoutUserService {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutUserService {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl LogoutUserUseCase for LogoutUserService {
    async fn execute(&self, token: Option<SessionToken>) -> Result<(), LogoutUserError> {
        let Some(token) = token else {
            return Ok(());
        };

        self.sessions
            .destroy(&token)
            .await
            .map_err(|e| LogoutUserError::SessionError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::SessionStoreError;
    use crate::tests::support::mocks::MockSessions;

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let mut sessions = MockSessions::new();
        sessions
            .expect_destroy()
            .withf(|token: &SessionToken| token.as_str() == "tok")
            .times(1)
            .returning(|_| Ok(()));

        let service = LogoutUserService::new(Arc::new(sessions));

        assert!(service
            .execute(Some(SessionToken::from("tok")))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_logout_without_session_is_noop() {
        let mut sessions = MockSessions::new();
        sessions.expect_destroy().never();

        let service = LogoutUserService::new(Arc::new(sessions));

        assert!(service.execute(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_logout_backend_failure() {
        let mut sessions = MockSessions::new();
        sessions
            .expect_destroy()
            .returning(|_| Err(SessionStoreError::Backend("down".to_string())));

        let service = LogoutUserService::new(Arc::new(sessions));

        let result = service.execute(Some(SessionToken::from("tok"))).await;

        assert!(matches!(result, Err(LogoutUserError::SessionError(_))));
    }
}
