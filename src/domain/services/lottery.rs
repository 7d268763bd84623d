use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::domain::models::band::Band;
use crate::domain::models::entry::Entry;
use crate::domain::models::lottery::{Lottery, LotteryResult};
use crate::domain::models::member::Member;
use crate::domain::ports::{BandRepository, EntryRepository, LotteryRepository};
use crate::domain::roles;
use crate::error::AppError;

/// Count, for every member across the whole band directory, how many band
/// rosters they currently sit on. The count is global: a member in two bands
/// is never exemption-eligible even if only one of those bands entered the
/// event.
pub fn membership_counts(bands: &[Band]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for band in bands {
        for member in band.members() {
            *counts.entry(member.member_id).or_insert(0) += 1;
        }
    }
    counts
}

/// A band is exempt when every roster member belongs to no other band.
/// An empty or unresolvable roster is never exempt.
fn is_exempt(band: &Band, counts: &HashMap<String, usize>) -> bool {
    let members = band.members();
    if members.is_empty() {
        return false;
    }
    members
        .iter()
        .all(|m| counts.get(&m.member_id).copied().unwrap_or(0) <= 1)
}

/// Partition band entries into exempt and competitive sets, then randomly
/// fill the slots left over after exemptions. Exempt entries are selected
/// unconditionally, even past capacity. Negative capacity clamps to zero
/// competitive winners.
pub fn draw_results<R: Rng + ?Sized>(
    entries: &[Entry],
    bands: &[Band],
    capacity: i64,
    rng: &mut R,
) -> Vec<LotteryResult> {
    let counts = membership_counts(bands);
    let band_index: HashMap<&str, &Band> = bands.iter().map(|b| (b.id.as_str(), b)).collect();

    let mut results = Vec::with_capacity(entries.len());
    let mut pool = Vec::new();

    for entry in entries {
        let band_id = entry.band_id.clone().unwrap_or_default();
        let band_name = entry.band_name.clone().unwrap_or_default();

        // A band id that does not resolve in the directory falls into the
        // competitive pool; missing roster data must never exempt anyone.
        let exempt = band_index
            .get(band_id.as_str())
            .is_some_and(|band| is_exempt(band, &counts));

        if exempt {
            results.push(LotteryResult {
                entry_id: entry.id.clone(),
                band_id,
                band_name,
                status: "selected".to_string(),
                exempt: true,
            });
        } else {
            pool.push((entry.id.clone(), band_id, band_name));
        }
    }

    let remaining_slots = (capacity - results.len() as i64).max(0) as usize;

    pool.shuffle(rng);
    for (i, (entry_id, band_id, band_name)) in pool.into_iter().enumerate() {
        let status = if i < remaining_slots { "selected" } else { "rejected" };
        results.push(LotteryResult {
            entry_id,
            band_id,
            band_name,
            status: status.to_string(),
            exempt: false,
        });
    }

    results
}

pub struct LotteryService {
    entry_repo: Arc<dyn EntryRepository>,
    band_repo: Arc<dyn BandRepository>,
    lottery_repo: Arc<dyn LotteryRepository>,
}

impl LotteryService {
    pub fn new(
        entry_repo: Arc<dyn EntryRepository>,
        band_repo: Arc<dyn BandRepository>,
        lottery_repo: Arc<dyn LotteryRepository>,
    ) -> Self {
        Self {
            entry_repo,
            band_repo,
            lottery_repo,
        }
    }

    /// Run the allocation for one event and persist the outcome as a
    /// pending lottery, replacing any previous run for the same event.
    /// Entry statuses are not touched until the lottery is approved.
    pub async fn run(
        &self,
        event_id: &str,
        capacity: i64,
        requester: &Member,
    ) -> Result<Lottery, AppError> {
        if !roles::has_permission(&requester.roles(), roles::PERM_EVENT_EDIT) {
            return Err(AppError::Forbidden(
                "Running a lottery requires event edit permission".into(),
            ));
        }

        let entries: Vec<Entry> = self
            .entry_repo
            .list_by_event(event_id)
            .await?
            .into_iter()
            .filter(|e| e.entry_type == "band")
            .collect();

        if entries.is_empty() {
            return Err(AppError::NoEntries);
        }

        // Full directory snapshot, not just the entered bands: membership
        // counts must see every roster in the system.
        let bands = self.band_repo.list().await?;

        let results = draw_results(&entries, &bands, capacity, &mut rand::thread_rng());
        let lottery = Lottery::new(event_id.to_string(), results, requester.id.clone());

        let saved = self.lottery_repo.upsert(&lottery).await?;
        info!(
            "Lottery drawn for event {}: {} entries, capacity {}",
            event_id,
            saved.results().len(),
            capacity
        );
        Ok(saved)
    }

    /// Accept a pending lottery: each result's status is written onto the
    /// matching entry and the lottery flips to approved, atomically.
    pub async fn approve(&self, lottery_id: &str, approver: &Member) -> Result<Lottery, AppError> {
        let lottery = self.load_pending(lottery_id, approver).await?;
        let approved = self.lottery_repo.approve(&lottery).await?;
        info!(
            "Lottery {} approved by {}; {} entries updated",
            lottery_id,
            approver.id,
            approved.results().len()
        );
        Ok(approved)
    }

    /// Decline a pending lottery. Entry statuses stay at `entered`.
    pub async fn reject(&self, lottery_id: &str, approver: &Member) -> Result<Lottery, AppError> {
        let lottery = self.load_pending(lottery_id, approver).await?;
        let rejected = self.lottery_repo.reject(&lottery).await?;
        info!("Lottery {} rejected by {}", lottery_id, approver.id);
        Ok(rejected)
    }

    async fn load_pending(&self, lottery_id: &str, approver: &Member) -> Result<Lottery, AppError> {
        if !roles::is_executive(&approver.roles()) {
            return Err(AppError::Forbidden(
                "Deciding a lottery requires an executive role".into(),
            ));
        }

        let lottery = self
            .lottery_repo
            .find_by_id(lottery_id)
            .await?
            .ok_or(AppError::NotFound("Lottery not found".into()))?;

        if !lottery.is_pending() {
            return Err(AppError::InvalidState(format!(
                "Lottery already {}",
                lottery.status
            )));
        }

        Ok(lottery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::band::BandMember;
    use crate::domain::models::entry::NewEntryParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn band(id: &str, name: &str, member_ids: &[&str]) -> Band {
        let members: Vec<BandMember> = member_ids
            .iter()
            .map(|m| BandMember {
                member_id: m.to_string(),
                name: m.to_string(),
                part: "Gt".to_string(),
            })
            .collect();
        let mut b = Band::new(name.to_string(), "closed".to_string(), members);
        b.id = id.to_string();
        b
    }

    fn entry(id: &str, band_id: &str) -> Entry {
        let mut e = Entry::new(NewEntryParams {
            event_id: "ev1".to_string(),
            entry_type: "band".to_string(),
            band_id: Some(band_id.to_string()),
            band_name: Some(band_id.to_string()),
            member_id: "m0".to_string(),
            member_name: "m0".to_string(),
            songs: vec![],
        });
        e.id = id.to_string();
        e
    }

    fn statuses(results: &[LotteryResult]) -> HashMap<String, (String, bool)> {
        results
            .iter()
            .map(|r| (r.band_id.clone(), (r.status.clone(), r.exempt)))
            .collect()
    }

    #[test]
    fn test_membership_counts_are_global() {
        let bands = vec![
            band("b1", "Alpha", &["m1", "m2"]),
            band("b2", "Beta", &["m2", "m3"]),
        ];
        let counts = membership_counts(&bands);
        assert_eq!(counts["m1"], 1);
        assert_eq!(counts["m2"], 2);
        assert_eq!(counts["m3"], 1);
    }

    #[test]
    fn test_single_band_members_are_exempt_even_at_zero_capacity() {
        let bands = vec![band("b1", "Alpha", &["m1", "m2"])];
        let entries = vec![entry("e1", "b1")];
        let mut rng = StdRng::seed_from_u64(7);

        let results = draw_results(&entries, &bands, 0, &mut rng);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, "selected");
        assert!(results[0].exempt);
    }

    #[test]
    fn test_shared_member_disqualifies_exemption() {
        // m2 plays in both bands, so neither band is exempt.
        let bands = vec![
            band("b1", "Alpha", &["m1", "m2"]),
            band("b2", "Beta", &["m2", "m3"]),
        ];
        let entries = vec![entry("e1", "b1"), entry("e2", "b2")];
        let mut rng = StdRng::seed_from_u64(7);

        let results = draw_results(&entries, &bands, 1, &mut rng);
        assert!(results.iter().all(|r| !r.exempt));
        let selected = results.iter().filter(|r| r.status == "selected").count();
        assert_eq!(selected, 1);
    }

    #[test]
    fn test_unresolved_band_is_competitive_not_exempt() {
        let bands = vec![band("b1", "Alpha", &["m1"])];
        let entries = vec![entry("e1", "b1"), entry("e2", "ghost")];
        let mut rng = StdRng::seed_from_u64(7);

        let results = draw_results(&entries, &bands, 0, &mut rng);
        let by_band = statuses(&results);
        assert_eq!(by_band["b1"], ("selected".to_string(), true));
        assert_eq!(by_band["ghost"], ("rejected".to_string(), false));
    }

    #[test]
    fn test_negative_capacity_clamps_to_zero_competitive_slots() {
        let bands = vec![
            band("b1", "Alpha", &["m1", "m2"]),
            band("b2", "Beta", &["m2", "m3"]),
        ];
        let entries = vec![entry("e1", "b1"), entry("e2", "b2")];
        let mut rng = StdRng::seed_from_u64(7);

        let results = draw_results(&entries, &bands, -3, &mut rng);
        assert!(results.iter().all(|r| r.status == "rejected"));
    }

    #[test]
    fn test_capacity_bound_and_conservation() {
        // b_shared plays everywhere so b0..b5 stay competitive.
        let mut bands = vec![band("bx", "Glue", &["shared"])];
        let mut entries = Vec::new();
        for i in 0..6 {
            let id = format!("b{}", i);
            bands.push(band(&id, &id, &[&format!("m{}", i), "shared"]));
            entries.push(entry(&format!("e{}", i), &id));
        }
        let mut rng = StdRng::seed_from_u64(42);

        let results = draw_results(&entries, &bands, 4, &mut rng);
        assert_eq!(results.len(), entries.len());
        let competitive_winners = results
            .iter()
            .filter(|r| r.status == "selected" && !r.exempt)
            .count();
        assert_eq!(competitive_winners, 4);
        assert!(results.iter().all(|r| !r.exempt));
    }

    #[test]
    fn test_whole_pool_selected_when_slots_exceed_pool() {
        let bands = vec![
            band("b1", "Alpha", &["m1", "m2"]),
            band("b2", "Beta", &["m2", "m3"]),
        ];
        let entries = vec![entry("e1", "b1"), entry("e2", "b2")];
        let mut rng = StdRng::seed_from_u64(7);

        let results = draw_results(&entries, &bands, 10, &mut rng);
        assert!(results.iter().all(|r| r.status == "selected"));
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let bands = vec![
            band("bx", "Glue", &["shared"]),
            band("b1", "Alpha", &["m1", "shared"]),
            band("b2", "Beta", &["m2", "shared"]),
            band("b3", "Gamma", &["m3", "shared"]),
        ];
        let entries = vec![entry("e1", "b1"), entry("e2", "b2"), entry("e3", "b3")];

        let first = draw_results(&entries, &bands, 1, &mut StdRng::seed_from_u64(99));
        let second = draw_results(&entries, &bands, 1, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_reference_scenario_capacity_two_and_four() {
        // Four entered bands: B1 and B4 fully independent rosters, B2 and B3
        // share a member.
        let bands = vec![
            band("B1", "B1", &["a", "b"]),
            band("B2", "B2", &["c", "d", "x"]),
            band("B3", "B3", &["x", "e"]),
            band("B4", "B4", &["f", "g"]),
        ];
        let entries = vec![
            entry("e1", "B1"),
            entry("e2", "B2"),
            entry("e3", "B3"),
            entry("e4", "B4"),
        ];

        let tight = draw_results(&entries, &bands, 2, &mut StdRng::seed_from_u64(1));
        let by_band = statuses(&tight);
        assert_eq!(by_band["B1"], ("selected".to_string(), true));
        assert_eq!(by_band["B4"], ("selected".to_string(), true));
        assert_eq!(by_band["B2"], ("rejected".to_string(), false));
        assert_eq!(by_band["B3"], ("rejected".to_string(), false));

        let roomy = draw_results(&entries, &bands, 4, &mut StdRng::seed_from_u64(1));
        let by_band = statuses(&roomy);
        assert_eq!(by_band["B1"], ("selected".to_string(), true));
        assert_eq!(by_band["B4"], ("selected".to_string(), true));
        assert_eq!(by_band["B2"], ("selected".to_string(), false));
        assert_eq!(by_band["B3"], ("selected".to_string(), false));
    }
}
