use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginCommand, LoginError,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserCommand, RegisterUserError,
};
use crate::auth::application::use_cases::AuthenticatedSession;
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryCommand, CreateEntryError, CreateEntryUseCase, DeleteEntryError,
    DeleteEntryUseCase, EditEntryCommand, EditEntryError, EditEntryUseCase, GetOwnedEntryError,
    GetOwnedEntryUseCase,
};
use crate::entry::application::ports::outgoing::EntryView;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, EditTopicCommand, EditTopicError, EditTopicUseCase, GetOwnedTopicError,
    GetOwnedTopicUseCase, ListOwnedTopicsError, ListOwnedTopicsUseCase, ListTopicsError,
    ListTopicsUseCase, TopicDetail, ViewTopicError, ViewTopicUseCase,
};
use crate::topic::application::ports::outgoing::TopicView;

// ============================================================
// Outgoing port stubs
// ============================================================

/// Issues `token-<uuid>` and accepts it back. `refresh-<uuid>` verifies as a
/// non-access token; anything else is malformed.
#[derive(Default, Clone)]
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("token-{}", user_id))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (token_type, raw_id) = if let Some(id) = token.strip_prefix("token-") {
            (ACCESS_TOKEN_TYPE, id)
        } else if let Some(id) = token.strip_prefix("refresh-") {
            ("refresh", id)
        } else {
            return Err(TokenError::MalformedToken);
        };

        let sub = Uuid::parse_str(raw_id).map_err(|_| TokenError::MalformedToken)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "blog_qa_test".to_string(),
            token_type: token_type.to_string(),
        })
    }
}

/// `hashed:<password>`, so tests can assert on what was stored.
#[derive(Default, Clone)]
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

// ============================================================
// Use case stubs (placeholders for routes a test does not hit)
// ============================================================

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<AuthenticatedSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthenticatedSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListTopicsUseCase;

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(&self) -> Result<Vec<TopicView>, ListTopicsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListOwnedTopicsUseCase;

#[async_trait]
impl ListOwnedTopicsUseCase for StubListOwnedTopicsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<TopicView>, ListOwnedTopicsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubViewTopicUseCase;

#[async_trait]
impl ViewTopicUseCase for StubViewTopicUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _topic_id: Uuid,
    ) -> Result<TopicDetail, ViewTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicView, CreateTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetOwnedTopicUseCase;

#[async_trait]
impl GetOwnedTopicUseCase for StubGetOwnedTopicUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _topic_id: Uuid,
    ) -> Result<TopicView, GetOwnedTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEditTopicUseCase;

#[async_trait]
impl EditTopicUseCase for StubEditTopicUseCase {
    async fn execute(&self, _command: EditTopicCommand) -> Result<TopicView, EditTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _requester: UserId, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateEntryUseCase;

#[async_trait]
impl CreateEntryUseCase for StubCreateEntryUseCase {
    async fn execute(&self, _command: CreateEntryCommand) -> Result<EntryView, CreateEntryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetOwnedEntryUseCase;

#[async_trait]
impl GetOwnedEntryUseCase for StubGetOwnedEntryUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _entry_id: Uuid,
    ) -> Result<EntryView, GetOwnedEntryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEditEntryUseCase;

#[async_trait]
impl EditEntryUseCase for StubEditEntryUseCase {
    async fn execute(&self, _command: EditEntryCommand) -> Result<EntryView, EditEntryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteEntryUseCase;

#[async_trait]
impl DeleteEntryUseCase for StubDeleteEntryUseCase {
    async fn execute(&self, _requester: UserId, _entry_id: Uuid) -> Result<Uuid, DeleteEntryError> {
        unimplemented!("Not used in this test")
    }
}
