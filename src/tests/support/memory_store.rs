use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::outgoing::{
    CreateEntryData, EntryQuery, EntryQueryError, EntryRepository, EntryRepositoryError,
    EntryView,
};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
    TopicView,
};

#[derive(Debug, Default)]
struct Tables {
    topics: Vec<TopicView>,
    entries: Vec<EntryView>,
    tick: i64,
}

impl Tables {
    /// Strictly increasing, so ordering by `date_added` is deterministic.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        self.tick += 1;
        Utc.timestamp_opt(1_700_000_000 + self.tick, 0).unwrap()
    }
}

/// Topics and entries held in memory, implementing every storage port with
/// the same owner scoping and cascade rules as the Postgres adapters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every port call fails with a database error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn insert_topic(&self, owner: UserId, text: &str) -> TopicView {
        let mut tables = self.lock();
        let topic = TopicView {
            id: Uuid::new_v4(),
            owner,
            text: text.to_string(),
            date_added: tables.next_timestamp(),
        };
        tables.topics.push(topic.clone());
        topic
    }

    pub fn insert_entry(&self, topic_id: Uuid, owner: UserId, text: &str) -> EntryView {
        let mut tables = self.lock();
        let entry = EntryView {
            id: Uuid::new_v4(),
            topic_id,
            owner,
            text: text.to_string(),
            date_added: tables.next_timestamp(),
        };
        tables.entries.push(entry.clone());
        entry
    }

    /// Stored topics in insertion order.
    pub fn topics(&self) -> Vec<TopicView> {
        self.lock().topics.clone()
    }

    /// Stored entries in insertion order.
    pub fn entries(&self) -> Vec<EntryView> {
        self.lock().entries.clone()
    }

    fn check(&self) -> Result<(), String> {
        if self.failing {
            Err("connection refused".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TopicQuery for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<TopicView>, TopicQueryError> {
        self.check().map_err(TopicQueryError::DatabaseError)?;
        let mut topics = self.topics();
        topics.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        Ok(topics)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<TopicView>, TopicQueryError> {
        let mut topics = self.list_all().await?;
        topics.retain(|t| t.owner == owner);
        Ok(topics)
    }

    async fn find_by_id(&self, topic_id: Uuid) -> Result<Option<TopicView>, TopicQueryError> {
        self.check().map_err(TopicQueryError::DatabaseError)?;
        Ok(self.lock().topics.iter().find(|t| t.id == topic_id).cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicView, TopicRepositoryError> {
        self.check().map_err(TopicRepositoryError::DatabaseError)?;
        Ok(self.insert_topic(data.owner, &data.text))
    }

    async fn update_topic_text(
        &self,
        owner: UserId,
        topic_id: Uuid,
        text: String,
    ) -> Result<TopicView, TopicRepositoryError> {
        self.check().map_err(TopicRepositoryError::DatabaseError)?;
        let mut tables = self.lock();
        let topic = tables
            .topics
            .iter_mut()
            .find(|t| t.id == topic_id && t.owner == owner)
            .ok_or(TopicRepositoryError::NotFound)?;
        topic.text = text;
        Ok(topic.clone())
    }

    async fn delete_topic(&self, owner: UserId, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        self.check().map_err(TopicRepositoryError::DatabaseError)?;
        let mut tables = self.lock();
        let before = tables.topics.len();
        tables.topics.retain(|t| !(t.id == topic_id && t.owner == owner));
        if tables.topics.len() == before {
            return Err(TopicRepositoryError::NotFound);
        }
        tables.entries.retain(|e| e.topic_id != topic_id);
        Ok(())
    }
}

#[async_trait]
impl EntryQuery for InMemoryStore {
    async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<EntryView>, EntryQueryError> {
        self.check().map_err(EntryQueryError::DatabaseError)?;
        let mut entries: Vec<_> = self
            .entries()
            .into_iter()
            .filter(|e| e.topic_id == topic_id)
            .collect();
        entries.sort_by(|a, b| a.date_added.cmp(&b.date_added));
        Ok(entries)
    }

    async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<EntryView>, EntryQueryError> {
        self.check().map_err(EntryQueryError::DatabaseError)?;
        Ok(self.lock().entries.iter().find(|e| e.id == entry_id).cloned())
    }
}

#[async_trait]
impl EntryRepository for InMemoryStore {
    async fn create_entry(&self, data: CreateEntryData) -> Result<EntryView, EntryRepositoryError> {
        self.check().map_err(EntryRepositoryError::DatabaseError)?;
        Ok(self.insert_entry(data.topic_id, data.owner, &data.text))
    }

    async fn update_entry_text(
        &self,
        owner: UserId,
        entry_id: Uuid,
        text: String,
    ) -> Result<EntryView, EntryRepositoryError> {
        self.check().map_err(EntryRepositoryError::DatabaseError)?;
        let mut tables = self.lock();
        let entry = tables
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id && e.owner == owner)
            .ok_or(EntryRepositoryError::NotFound)?;
        entry.text = text;
        Ok(entry.clone())
    }

    async fn delete_entry(&self, owner: UserId, entry_id: Uuid) -> Result<(), EntryRepositoryError> {
        self.check().map_err(EntryRepositoryError::DatabaseError)?;
        let mut tables = self.lock();
        let before = tables.entries.len();
        tables.entries.retain(|e| !(e.id == entry_id && e.owner == owner));
        if tables.entries.len() == before {
            return Err(EntryRepositoryError::NotFound);
        }
        Ok(())
    }
}
