//! Core registry engine.

use crate::bag::Bag;
use crate::error::RegistryError;
use crate::event::BagEvent;
use satchel_accrual::{compute_accrued, RateTable};
use satchel_custody::{CustodyAdapter, CustodyError, RewardLedger};
use satchel_store::{RegistryStore, StoreError};
use satchel_types::{
    AssetId, BagId, OwnerAddress, PublicKey, RarityTier, RewardAmount, Timestamp,
};
use satchel_voucher::{verify, AdmissionVoucher, SigningDomain, VoucherError};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// The bag registry — creates, mutates, settles, and tears down bags.
///
/// Generic over the custody and reward-ledger adapters. Every operation
/// takes `now` explicitly so the engine stays deterministic; callers pass
/// wall-clock time in production and a controlled clock in tests.
pub struct BagRegistry<C: CustodyAdapter, L: RewardLedger> {
    custody: C,
    ledger: L,
    bags: HashMap<BagId, Bag>,
    next_bag_id: BagId,
    /// The currently authorized voucher signer. Exactly one at a time.
    signer: PublicKey,
    /// The only identity allowed to rotate the signer or edit rates.
    admin: OwnerAddress,
    rates: RateTable,
    domain: SigningDomain,
    events: Vec<BagEvent>,
}

impl<C: CustodyAdapter, L: RewardLedger> BagRegistry<C, L> {
    pub fn new(
        custody: C,
        ledger: L,
        signer: PublicKey,
        admin: OwnerAddress,
        rates: RateTable,
        domain: SigningDomain,
    ) -> Self {
        Self {
            custody,
            ledger,
            bags: HashMap::new(),
            next_bag_id: 1,
            signer,
            admin,
            rates,
            domain,
            events: Vec::new(),
        }
    }

    // ── Staking ──────────────────────────────────────────────────────────

    /// Create a new bag from a verified voucher, or extend an existing one.
    ///
    /// With `extend = Some(id)` the voucher's secondary assets are appended
    /// to the caller's Active bag `id`; the voucher must attest the same
    /// primary asset the bag already holds, and accrued reward is settled at
    /// the old composition before the change applies. Returns the bag id.
    pub fn stake(
        &mut self,
        caller: &OwnerAddress,
        voucher: &AdmissionVoucher,
        extend: Option<BagId>,
        now: Timestamp,
    ) -> Result<BagId, RegistryError> {
        let admission = verify(voucher, caller, &self.signer, &self.domain)?;

        // Rarities must be priceable before any asset moves, so an unknown
        // tier cannot strand a locked bag.
        self.rates.primary_rate(admission.primary.rarity)?;
        for asset in &admission.secondaries {
            self.rates.secondary_rate(asset.rarity)?;
        }

        match extend {
            Some(id) => {
                let bag = self.bags.get(&id).ok_or(RegistryError::BagNotOwned(id))?;
                if bag.owner != *caller {
                    return Err(RegistryError::BagNotOwned(id));
                }
                if bag.primary.token != admission.primary.token {
                    return Err(RegistryError::AdmissionDenied(
                        VoucherError::PrimaryMismatch {
                            attested: admission.primary.token,
                            held: bag.primary.token,
                        },
                    ));
                }
                for asset in &admission.secondaries {
                    if bag.contains_secondary(asset.token) {
                        return Err(RegistryError::AssetUnavailable(
                            CustodyError::AlreadyLocked(AssetId::secondary(asset.token)),
                        ));
                    }
                }
                // Settle-then-mutate: time spent under the old composition
                // is billed at the old rate.
                let settled = self.settled_balance(bag, now)?;

                let new_assets: Vec<AssetId> = admission
                    .secondaries
                    .iter()
                    .map(|a| AssetId::secondary(a.token))
                    .collect();
                self.lock_all(caller, &new_assets)?;

                let bag = self
                    .bags
                    .get_mut(&id)
                    .ok_or(RegistryError::AlreadyUnstaked(id))?;
                bag.unclaimed = settled;
                bag.secondaries.extend(admission.secondaries.iter().copied());
                bag.last_settlement = now;
                let added = admission.secondaries.len();
                debug!(bag = id, added, "extended bag via voucher");
                self.events.push(BagEvent::Extended { bag: id, added });
                Ok(id)
            }
            None => {
                let mut assets = vec![AssetId::primary(admission.primary.token)];
                assets.extend(
                    admission
                        .secondaries
                        .iter()
                        .map(|a| AssetId::secondary(a.token)),
                );
                self.lock_all(caller, &assets)?;

                let id = self.next_bag_id;
                self.next_bag_id = self
                    .next_bag_id
                    .checked_add(1)
                    .ok_or(RegistryError::Overflow)?;
                self.bags.insert(
                    id,
                    Bag {
                        id,
                        owner: caller.clone(),
                        primary: admission.primary,
                        secondaries: admission.secondaries,
                        unclaimed: RewardAmount::ZERO,
                        last_settlement: now,
                    },
                );
                info!(bag = id, owner = %caller, "bag created");
                self.events.push(BagEvent::Created {
                    bag: id,
                    owner: caller.clone(),
                });
                Ok(id)
            }
        }
    }

    /// Append secondary assets to an Active bag owned by the caller.
    ///
    /// Settles accrued reward at the pre-change composition, locks the new
    /// assets, appends them, and resets the accrual clock.
    pub fn add_bag_info(
        &mut self,
        caller: &OwnerAddress,
        bag_id: BagId,
        new_tokens: &[u64],
        new_rarities: &[RarityTier],
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        if new_tokens.len() != new_rarities.len() {
            return Err(RegistryError::AdmissionDenied(
                VoucherError::LengthMismatch {
                    tokens: new_tokens.len(),
                    rarities: new_rarities.len(),
                },
            ));
        }
        for rarity in new_rarities {
            self.rates.secondary_rate(*rarity)?;
        }

        let bag = self
            .bags
            .get(&bag_id)
            .ok_or(RegistryError::AlreadyUnstaked(bag_id))?;
        if bag.owner != *caller {
            return Err(RegistryError::BagNotOwned(bag_id));
        }
        let mut seen: HashSet<u64> = HashSet::new();
        for token in new_tokens {
            if bag.contains_secondary(*token) || !seen.insert(*token) {
                return Err(RegistryError::AssetUnavailable(
                    CustodyError::AlreadyLocked(AssetId::secondary(*token)),
                ));
            }
        }
        let settled = self.settled_balance(bag, now)?;

        let assets: Vec<AssetId> = new_tokens.iter().map(|t| AssetId::secondary(*t)).collect();
        self.lock_all(caller, &assets)?;

        let bag = self
            .bags
            .get_mut(&bag_id)
            .ok_or(RegistryError::AlreadyUnstaked(bag_id))?;
        bag.unclaimed = settled;
        bag.secondaries.extend(
            new_tokens
                .iter()
                .zip(new_rarities)
                .map(|(t, r)| satchel_types::StakedAsset::new(*t, *r)),
        );
        bag.last_settlement = now;
        debug!(bag = bag_id, added = new_tokens.len(), "bag composition extended");
        self.events.push(BagEvent::Extended {
            bag: bag_id,
            added: new_tokens.len(),
        });
        Ok(())
    }

    // ── Claims ───────────────────────────────────────────────────────────

    /// Settle accrual and pay out a caller-specified amount.
    ///
    /// Fails `InsufficientBalance` if `amount` exceeds the settled balance;
    /// on payout failure nothing changes. Partial claims are
    /// order-independent: claiming X then Y at the same instant equals
    /// claiming X+Y once.
    pub fn claim(
        &mut self,
        caller: &OwnerAddress,
        bag_id: BagId,
        amount: RewardAmount,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let bag = self
            .bags
            .get(&bag_id)
            .ok_or(RegistryError::AlreadyUnstaked(bag_id))?;
        if bag.owner != *caller {
            return Err(RegistryError::BagNotOwned(bag_id));
        }
        let available = self.settled_balance(bag, now)?;
        if amount > available {
            return Err(RegistryError::InsufficientBalance {
                requested: amount,
                available,
            });
        }
        if !amount.is_zero() {
            self.ledger.mint_or_transfer(caller, amount)?;
        }
        let bag = self
            .bags
            .get_mut(&bag_id)
            .ok_or(RegistryError::AlreadyUnstaked(bag_id))?;
        bag.unclaimed = available.saturating_sub(amount);
        bag.last_settlement = now;
        debug!(bag = bag_id, amount = %amount, "claim paid");
        self.events.push(BagEvent::Claimed {
            bag: bag_id,
            amount,
        });
        Ok(())
    }

    /// Settle accrual and pay out the entire balance, zeroing it.
    pub fn claim_all(
        &mut self,
        caller: &OwnerAddress,
        bag_id: BagId,
        now: Timestamp,
    ) -> Result<RewardAmount, RegistryError> {
        let bag = self
            .bags
            .get(&bag_id)
            .ok_or(RegistryError::AlreadyUnstaked(bag_id))?;
        if bag.owner != *caller {
            return Err(RegistryError::BagNotOwned(bag_id));
        }
        let available = self.settled_balance(bag, now)?;
        if !available.is_zero() {
            self.ledger.mint_or_transfer(caller, available)?;
        }
        let bag = self
            .bags
            .get_mut(&bag_id)
            .ok_or(RegistryError::AlreadyUnstaked(bag_id))?;
        bag.unclaimed = RewardAmount::ZERO;
        bag.last_settlement = now;
        debug!(bag = bag_id, amount = %available, "claim-all paid");
        self.events.push(BagEvent::Claimed {
            bag: bag_id,
            amount: available,
        });
        Ok(available)
    }

    // ── Unstaking ────────────────────────────────────────────────────────

    /// Tear down bags: final settlement is paid out, every asset is
    /// returned to the owner, and the bags transition to Nonexistent.
    ///
    /// All-or-nothing across the whole id list. Returns the total payout.
    pub fn unstake(
        &mut self,
        caller: &OwnerAddress,
        bag_ids: &[BagId],
        now: Timestamp,
    ) -> Result<RewardAmount, RegistryError> {
        let mut seen: HashSet<BagId> = HashSet::new();
        let mut payouts: Vec<(BagId, RewardAmount)> = Vec::with_capacity(bag_ids.len());
        let mut assets: Vec<AssetId> = Vec::new();
        let mut total = RewardAmount::ZERO;
        for id in bag_ids {
            if !seen.insert(*id) {
                return Err(RegistryError::AlreadyUnstaked(*id));
            }
            let bag = self
                .bags
                .get(id)
                .ok_or(RegistryError::AlreadyUnstaked(*id))?;
            if bag.owner != *caller {
                return Err(RegistryError::BagNotOwned(*id));
            }
            let settled = self.settled_balance(bag, now)?;
            total = total.checked_add(settled).ok_or(RegistryError::Overflow)?;
            payouts.push((*id, settled));
            assets.extend(bag.asset_ids());
        }

        self.release_all(caller, &assets)?;
        if !total.is_zero() {
            if let Err(e) = self.ledger.mint_or_transfer(caller, total) {
                // The ledger rejected the final payout; put the assets back
                // so the bags remain fully staked.
                self.relock_all(caller, &assets);
                return Err(e.into());
            }
        }

        for (id, final_payout) in payouts {
            if let Some(bag) = self.bags.remove(&id) {
                info!(bag = id, owner = %caller, payout = %final_payout, "bag unstaked");
                self.events.push(BagEvent::Unstaked {
                    bag: id,
                    owner: bag.owner,
                    final_payout,
                });
            }
        }
        Ok(total)
    }

    // ── Administration ───────────────────────────────────────────────────

    /// Replace the active voucher signer. Administrator only.
    pub fn modify_signer(
        &mut self,
        caller: &OwnerAddress,
        new_signer: PublicKey,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        let retired = std::mem::replace(&mut self.signer, new_signer.clone());
        info!(active = %new_signer, "voucher signer rotated");
        self.events.push(BagEvent::SignerRotated {
            retired,
            active: new_signer,
        });
        Ok(())
    }

    /// Set the per-day rate for a primary-collection rarity tier.
    pub fn set_primary_rate(
        &mut self,
        caller: &OwnerAddress,
        tier: RarityTier,
        raw_per_day: u128,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        self.rates.set_primary_rate(tier, raw_per_day);
        Ok(())
    }

    /// Set the per-day rate for a secondary-collection rarity tier.
    pub fn set_secondary_rate(
        &mut self,
        caller: &OwnerAddress,
        tier: RarityTier,
        raw_per_day: u128,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        self.rates.set_secondary_rate(tier, raw_per_day);
        Ok(())
    }

    fn require_admin(&self, caller: &OwnerAddress) -> Result<(), RegistryError> {
        if *caller != self.admin {
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }

    // ── Views ────────────────────────────────────────────────────────────

    pub fn bag(&self, id: BagId) -> Option<&Bag> {
        self.bags.get(&id)
    }

    pub fn bag_count(&self) -> usize {
        self.bags.len()
    }

    pub fn active_signer(&self) -> &PublicKey {
        &self.signer
    }

    /// The reward a bag would settle to at `now`, without mutating anything.
    pub fn pending_reward(
        &self,
        bag_id: BagId,
        now: Timestamp,
    ) -> Result<RewardAmount, RegistryError> {
        let bag = self
            .bags
            .get(&bag_id)
            .ok_or(RegistryError::AlreadyUnstaked(bag_id))?;
        self.settled_balance(bag, now)
    }

    /// Drain the accumulated event log.
    pub fn drain_events(&mut self) -> Vec<BagEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Internals ────────────────────────────────────────────────────────

    /// Unclaimed balance plus accrual since the last settlement, at the
    /// bag's current composition. Pure with respect to registry state.
    fn settled_balance(&self, bag: &Bag, now: Timestamp) -> Result<RewardAmount, RegistryError> {
        let elapsed = bag.last_settlement.elapsed_since(now);
        let accrued = compute_accrued(
            &self.rates,
            bag.primary.rarity,
            &bag.secondary_rarities(),
            elapsed,
        )?;
        bag.unclaimed
            .checked_add(accrued)
            .ok_or(RegistryError::Overflow)
    }

    /// Lock every asset or none: a failure part-way unwinds the locks
    /// already taken.
    fn lock_all(&self, from: &OwnerAddress, assets: &[AssetId]) -> Result<(), RegistryError> {
        for (i, asset) in assets.iter().enumerate() {
            if let Err(e) = self.custody.lock(*asset, from) {
                for taken in &assets[..i] {
                    if let Err(undo) = self.custody.release(*taken, from) {
                        warn!(asset = %taken, error = %undo, "lock rollback failed");
                    }
                }
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Release every asset or none: a failure part-way re-locks the assets
    /// already released.
    fn release_all(&self, to: &OwnerAddress, assets: &[AssetId]) -> Result<(), RegistryError> {
        for (i, asset) in assets.iter().enumerate() {
            if let Err(e) = self.custody.release(*asset, to) {
                self.relock_all(to, &assets[..i]);
                return Err(e.into());
            }
        }
        Ok(())
    }

    fn relock_all(&self, from: &OwnerAddress, assets: &[AssetId]) {
        for asset in assets {
            if let Err(e) = self.custody.lock(*asset, from) {
                warn!(asset = %asset, error = %e, "compensating re-lock failed");
            }
        }
    }
}

impl<C: CustodyAdapter, L: RewardLedger> BagRegistry<C, L> {
    const META_NEXT_BAG_ID: &'static [u8] = b"next_bag_id";
    const META_SIGNER: &'static [u8] = b"signer";
    const META_RATES: &'static [u8] = b"rates";

    /// Persist bags, the id counter, the active signer, and the rate table.
    pub fn save_to_store(&self, store: &dyn RegistryStore) -> Result<(), RegistryError> {
        store.put_meta(Self::META_NEXT_BAG_ID, &self.next_bag_id.to_be_bytes())?;
        store.put_meta(Self::META_SIGNER, &self.signer.0)?;
        let rates = bincode::serialize(&self.rates)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        store.put_meta(Self::META_RATES, &rates)?;
        for (id, bag) in &self.bags {
            let bytes =
                bincode::serialize(bag).map_err(|e| StoreError::Serialization(e.to_string()))?;
            store.put_bag(*id, &bytes)?;
        }
        // Drop records for bags unstaked since the last save.
        for (id, _) in store.iter_bags()? {
            if !self.bags.contains_key(&id) {
                store.delete_bag(id)?;
            }
        }
        Ok(())
    }

    /// Restore registry state from a store, wiring in fresh adapters and
    /// configuration.
    pub fn load_from_store(
        custody: C,
        ledger: L,
        admin: OwnerAddress,
        domain: SigningDomain,
        store: &dyn RegistryStore,
    ) -> Result<Self, RegistryError> {
        let next_bag_id = match store.get_meta(Self::META_NEXT_BAG_ID)? {
            Some(bytes) => match <[u8; 8]>::try_from(bytes.as_slice()) {
                Ok(raw) => u64::from_be_bytes(raw),
                Err(_) => {
                    return Err(StoreError::Serialization("bad id counter length".into()).into())
                }
            },
            None => 1,
        };
        let signer = match store.get_meta(Self::META_SIGNER)? {
            Some(bytes) => match <[u8; 32]>::try_from(bytes.as_slice()) {
                Ok(raw) => PublicKey(raw),
                Err(_) => {
                    return Err(StoreError::Serialization("bad signer key length".into()).into())
                }
            },
            None => return Err(StoreError::NotFound("signer".into()).into()),
        };
        let rates = match store.get_meta(Self::META_RATES)? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?,
            None => RateTable::default(),
        };
        let mut bags = HashMap::new();
        for (id, bytes) in store.iter_bags()? {
            let bag: Bag = bincode::deserialize(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            bags.insert(id, bag);
        }
        Ok(Self {
            custody,
            ledger,
            bags,
            next_bag_id,
            signer,
            admin,
            rates,
            domain,
            events: Vec::new(),
        })
    }
}
