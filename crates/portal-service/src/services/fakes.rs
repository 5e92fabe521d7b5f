//! In-memory repository fakes for service tests
//!
//! The fakes mirror the store semantics the services rely on: the email
//! unique index, the guarded admission transitions, and the check-in
//! upsert on (member, meeting).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use portal_common::auth::JwtService;
use portal_core::{
    ApprovalOutcome, Attendance, AttendanceRepository, DomainError, Intention, IntentionPage,
    IntentionRepository, IntentionStatus, Mail, Meeting, MeetingRepository, Member,
    MemberAttendance, MemberPage, MemberRepository, MemberSeed, MemberStatus, Membership,
    MembershipRepository, MembershipStatus, Notifier, NotifyError, RepoResult, Thank,
    ThankRepository, User, UserRole,
};

use super::context::{ServiceContext, ServiceContextBuilder};
use super::token::TokenIssuer;

/// Shared in-memory tables
#[derive(Default)]
pub struct TestStore {
    pub intentions: Mutex<Vec<Intention>>,
    pub members: Mutex<Vec<Member>>,
    pub users: Mutex<Vec<User>>,
    pub meetings: Mutex<Vec<Meeting>>,
    pub attendances: Mutex<Vec<Attendance>>,
    pub thanks: Mutex<Vec<Thank>>,
    pub memberships: Mutex<Vec<Membership>>,
}

/// Notifier that records every mail it is asked to send
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Mail>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, mail: &Mail) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// Notifier that always fails
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _mail: &Mail) -> Result<(), NotifyError> {
        Err(NotifyError("smtp unreachable".to_string()))
    }
}

/// Build a service context over the store with a recording notifier
pub fn test_context(store: Arc<TestStore>) -> ServiceContext {
    test_context_with_notifier(store, Arc::new(RecordingNotifier::default()))
}

/// Build a service context over the store with the given notifier
pub fn test_context_with_notifier(
    store: Arc<TestStore>,
    notifier: Arc<dyn Notifier>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .intention_repo(Arc::new(FakeIntentionRepository(store.clone())))
        .member_repo(Arc::new(FakeMemberRepository(store.clone())))
        .meeting_repo(Arc::new(FakeMeetingRepository(store.clone())))
        .attendance_repo(Arc::new(FakeAttendanceRepository(store.clone())))
        .thank_repo(Arc::new(FakeThankRepository(store.clone())))
        .membership_repo(Arc::new(FakeMembershipRepository(store)))
        .notifier(notifier)
        .token_issuer(TokenIssuer::new(72))
        .jwt_service(Arc::new(JwtService::new(
            "test-secret-key-that-is-long-enough",
            900,
        )))
        .registration_base_url("http://localhost:3000")
        .build()
        .unwrap()
}

pub struct FakeIntentionRepository(pub Arc<TestStore>);

#[async_trait]
impl IntentionRepository for FakeIntentionRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Intention>> {
        Ok(self
            .0
            .intentions
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Intention>> {
        let intentions = self.0.intentions.lock().unwrap();
        Ok(intentions
            .iter()
            .filter(|i| i.email == email)
            .max_by_key(|i| i.created_at)
            .cloned())
    }

    async fn create(&self, intention: &Intention) -> RepoResult<()> {
        let mut intentions = self.0.intentions.lock().unwrap();
        if intentions.iter().any(|i| i.email == intention.email) {
            return Err(DomainError::DuplicateEmail);
        }
        intentions.push(intention.clone());
        Ok(())
    }

    async fn list(
        &self,
        status: Option<IntentionStatus>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<IntentionPage> {
        let intentions = self.0.intentions.lock().unwrap();
        let mut matching: Vec<Intention> = intentions
            .iter()
            .filter(|i| status.is_none_or(|s| i.status == s))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok(IntentionPage {
            intentions: page,
            total,
        })
    }

    async fn approve_pending(&self, id: Uuid, seed: &MemberSeed) -> RepoResult<ApprovalOutcome> {
        let mut intentions = self.0.intentions.lock().unwrap();
        let intention = intentions
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::IntentionNotFound(id))?;

        if intention.status != IntentionStatus::Pending {
            return Err(DomainError::IntentionAlreadyProcessed);
        }
        intention.status = IntentionStatus::Approved;
        intention.updated_at = Utc::now();

        let mut users = self.0.users.lock().unwrap();
        let user = users.iter_mut().find(|u| u.email == intention.email);

        let member = if user.is_some() {
            Member::active(intention.name.clone(), intention.email.clone())
        } else {
            Member::invited(
                intention.name.clone(),
                intention.email.clone(),
                seed.invite_token.clone(),
                seed.token_expiry,
            )
        }
        .with_intention(intention.id)
        .with_phone(intention.phone.clone());

        let linked_user_id = user.map(|u| {
            u.member_id = Some(member.id);
            if u.role == UserRole::Guest {
                u.role = UserRole::Member;
            }
            u.id
        });

        self.0.members.lock().unwrap().push(member.clone());

        Ok(ApprovalOutcome {
            member,
            linked_user_id,
        })
    }

    async fn reject_pending(&self, id: Uuid) -> RepoResult<Intention> {
        let mut intentions = self.0.intentions.lock().unwrap();
        let intention = intentions
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::IntentionNotFound(id))?;

        if intention.status != IntentionStatus::Pending {
            return Err(DomainError::IntentionAlreadyProcessed);
        }
        intention.status = IntentionStatus::Rejected;
        intention.updated_at = Utc::now();

        Ok(intention.clone())
    }
}

pub struct FakeMemberRepository(pub Arc<TestStore>);

#[async_trait]
impl MemberRepository for FakeMemberRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        Ok(self
            .0
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .0
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> RepoResult<MemberPage> {
        let members = self.0.members.lock().unwrap();
        let mut all: Vec<Member> = members.clone();
        all.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));

        let total = all.len() as i64;
        let page = all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok(MemberPage {
            members: page,
            total,
        })
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.0.members.lock().unwrap().len() as i64)
    }

    async fn count_active(&self) -> RepoResult<i64> {
        Ok(self
            .0
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.status == MemberStatus::Active)
            .count() as i64)
    }

    async fn count_active_joined_before(&self, cutoff: DateTime<Utc>) -> RepoResult<i64> {
        Ok(self
            .0
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.status == MemberStatus::Active && m.joined_at < cutoff)
            .count() as i64)
    }
}

pub struct FakeMeetingRepository(pub Arc<TestStore>);

#[async_trait]
impl MeetingRepository for FakeMeetingRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Meeting>> {
        Ok(self
            .0
            .meetings
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn count_since(&self, since: Option<DateTime<Utc>>) -> RepoResult<i64> {
        Ok(self
            .0
            .meetings
            .lock()
            .unwrap()
            .iter()
            .filter(|m| since.is_none_or(|s| m.date >= s))
            .count() as i64)
    }
}

pub struct FakeAttendanceRepository(pub Arc<TestStore>);

#[async_trait]
impl AttendanceRepository for FakeAttendanceRepository {
    async fn check_in(&self, member_id: Uuid, meeting_id: Uuid) -> RepoResult<Attendance> {
        let mut attendances = self.0.attendances.lock().unwrap();
        if let Some(existing) = attendances
            .iter_mut()
            .find(|a| a.member_id == member_id && a.meeting_id == meeting_id)
        {
            existing.checked_in = true;
            existing.check_in_at = Some(Utc::now());
            return Ok(existing.clone());
        }

        let attendance = Attendance::checked_in(member_id, meeting_id);
        attendances.push(attendance.clone());
        Ok(attendance)
    }

    async fn find_for_member(
        &self,
        member_id: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<MemberAttendance>> {
        let attendances = self.0.attendances.lock().unwrap();
        let meetings = self.0.meetings.lock().unwrap();

        let mut rows: Vec<MemberAttendance> = attendances
            .iter()
            .filter(|a| a.member_id == member_id)
            .filter_map(|a| {
                meetings
                    .iter()
                    .find(|m| m.id == a.meeting_id)
                    .map(|m| MemberAttendance {
                        meeting_date: m.date,
                        checked_in: a.checked_in,
                    })
            })
            .filter(|r| since.is_none_or(|s| r.meeting_date >= s))
            .collect();
        rows.sort_by_key(|r| r.meeting_date);

        Ok(rows)
    }

    async fn count_checked_in(&self) -> RepoResult<i64> {
        Ok(self
            .0
            .attendances
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.checked_in)
            .count() as i64)
    }
}

pub struct FakeThankRepository(pub Arc<TestStore>);

#[async_trait]
impl ThankRepository for FakeThankRepository {
    async fn count_since(&self, since: Option<DateTime<Utc>>) -> RepoResult<i64> {
        Ok(self
            .0
            .thanks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| since.is_none_or(|s| t.created_at >= s))
            .count() as i64)
    }
}

pub struct FakeMembershipRepository(pub Arc<TestStore>);

#[async_trait]
impl MembershipRepository for FakeMembershipRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Membership>> {
        Ok(self
            .0
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn mark_paid(
        &self,
        id: Uuid,
        paid_at: DateTime<Utc>,
        payment_method: &str,
        notes: Option<&str>,
    ) -> RepoResult<Membership> {
        let mut memberships = self.0.memberships.lock().unwrap();
        let membership = memberships
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::MembershipNotFound(id))?;

        match membership.status {
            MembershipStatus::Paid => return Err(DomainError::MembershipAlreadyPaid),
            MembershipStatus::Cancelled => return Err(DomainError::MembershipCancelled),
            MembershipStatus::Pending | MembershipStatus::Overdue => {}
        }

        membership.status = MembershipStatus::Paid;
        membership.paid_at = Some(paid_at);
        membership.payment_method = Some(payment_method.to_string());
        if let Some(notes) = notes {
            membership.notes = Some(notes.to_string());
        }
        membership.updated_at = Utc::now();

        Ok(membership.clone())
    }

    async fn mark_overdue(&self, id: Uuid) -> RepoResult<Membership> {
        let mut memberships = self.0.memberships.lock().unwrap();
        let membership = memberships
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::MembershipNotFound(id))?;

        match membership.status {
            MembershipStatus::Pending => {
                membership.status = MembershipStatus::Overdue;
                membership.updated_at = Utc::now();
            }
            MembershipStatus::Overdue => {}
            MembershipStatus::Paid => return Err(DomainError::MembershipAlreadyPaid),
            MembershipStatus::Cancelled => return Err(DomainError::MembershipCancelled),
        }

        Ok(membership.clone())
    }

    async fn cancel(&self, id: Uuid) -> RepoResult<Membership> {
        let mut memberships = self.0.memberships.lock().unwrap();
        let membership = memberships
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::MembershipNotFound(id))?;

        if membership.status == MembershipStatus::Cancelled {
            return Err(DomainError::MembershipCancelled);
        }
        membership.status = MembershipStatus::Cancelled;
        membership.updated_at = Utc::now();

        Ok(membership.clone())
    }
}
