//! In-Memory Repositories
//!
//! Process-local implementations of the domain repositories, selected with
//! `storage.backend = "memory"`. Contents are lost on restart. Used for local
//! development and by the HTTP test suite.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{
    BlobRepository, DomainBlob, KycStatus, KycVerification, KycVerificationRepository,
    RenterProfile, RenterRepository, Station, StationFilter, StationRepository,
};
use crate::shared::error::AppError;
use crate::shared::pagination;

#[derive(Default)]
pub struct InMemoryStationRepository {
    stations: RwLock<BTreeMap<Uuid, Station>>,
}

impl InMemoryStationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>, AppError> {
        Ok(self.stations.read().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Station>, AppError> {
        Ok(self
            .stations
            .read()
            .values()
            .find(|s| s.name == name)
            .cloned())
    }

    async fn search(&self, filter: &StationFilter) -> Result<(Vec<Station>, u64), AppError> {
        let mut matching: Vec<Station> = self
            .stations
            .read()
            .values()
            .filter(|s| s.matches(filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(pagination::offset(filter.page, filter.page_size) as usize)
            .take(filter.page_size as usize)
            .collect();

        Ok((page, total))
    }

    async fn create(&self, station: &Station) -> Result<Station, AppError> {
        let mut stations = self.stations.write();
        if stations.values().any(|s| s.name == station.name) {
            return Err(AppError::Conflict(
                "Station with this name already exists".into(),
            ));
        }
        stations.insert(station.id, station.clone());
        Ok(station.clone())
    }

    async fn update(&self, station: &Station) -> Result<Station, AppError> {
        let mut stations = self.stations.write();
        if stations
            .values()
            .any(|s| s.id != station.id && s.name == station.name)
        {
            return Err(AppError::Conflict(
                "Station with this name already exists".into(),
            ));
        }

        match stations.get_mut(&station.id) {
            Some(existing) => {
                *existing = station.clone();
                Ok(station.clone())
            }
            None => Err(AppError::NotFound("Station not found".into())),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.stations.write().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryRenterRepository {
    renters: RwLock<BTreeMap<Uuid, RenterProfile>>,
}

impl InMemoryRenterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RenterRepository for InMemoryRenterRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RenterProfile>, AppError> {
        Ok(self.renters.read().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<RenterProfile>, AppError> {
        Ok(self
            .renters
            .read()
            .values()
            .find(|r| r.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.renters.read().values().any(|r| r.email == email))
    }

    async fn create(&self, renter: &RenterProfile) -> Result<RenterProfile, AppError> {
        let mut renters = self.renters.write();
        if renters.values().any(|r| r.email == renter.email) {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        renters.insert(renter.id, renter.clone());
        Ok(renter.clone())
    }

    async fn update(&self, renter: &RenterProfile) -> Result<RenterProfile, AppError> {
        let mut renters = self.renters.write();
        match renters.get_mut(&renter.id) {
            Some(existing) => {
                *existing = renter.clone();
                Ok(renter.clone())
            }
            None => Err(AppError::NotFound("Renter not found".into())),
        }
    }
}

/// Audit log sharing the renter store it records decisions against.
pub struct InMemoryKycVerificationRepository {
    renters: Arc<InMemoryRenterRepository>,
    records: RwLock<Vec<KycVerification>>,
}

impl InMemoryKycVerificationRepository {
    pub fn new(renters: Arc<InMemoryRenterRepository>) -> Self {
        Self {
            renters,
            records: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl KycVerificationRepository for InMemoryKycVerificationRepository {
    async fn record_decision(
        &self,
        record: &KycVerification,
        status: KycStatus,
    ) -> Result<KycVerification, AppError> {
        // Lock order: renters, then records
        let mut renters = self.renters.renters.write();
        let renter = renters
            .get_mut(&record.renter_id)
            .ok_or_else(|| AppError::NotFound("Renter not found".into()))?;

        let mut records = self.records.write();
        renter.kyc_status = status;
        renter.updated_at = record.created_at;
        records.push(record.clone());

        Ok(record.clone())
    }

    async fn find_by_renter(&self, renter_id: Uuid) -> Result<Vec<KycVerification>, AppError> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| r.renter_id == renter_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryBlobRepository {
    blobs: RwLock<BTreeMap<Uuid, DomainBlob>>,
}

impl InMemoryBlobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobRepository for InMemoryBlobRepository {
    async fn create(&self, blob: &DomainBlob) -> Result<DomainBlob, AppError> {
        let mut blobs = self.blobs.write();
        if blobs.values().any(|b| b.blob_name == blob.blob_name) {
            return Err(AppError::Conflict("Blob name already in use".into()));
        }
        blobs.insert(blob.id, blob.clone());
        Ok(blob.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DomainBlob>, AppError> {
        Ok(self.blobs.read().get(&id).cloned())
    }
}
