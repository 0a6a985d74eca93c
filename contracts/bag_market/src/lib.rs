#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// # Bag Market — Ownership Ledger & Forced-Sale Engine
///
/// **Role:** Ground-truth ownership ledger for unique "Bag" assets, with an
/// always-on forced-sale mechanism: every bag carries a listed price, and any
/// account may acquire it by attaching at least that price to `purchase`.
/// A successful purchase transfers ownership, escalates the listed price
/// through a tiered schedule, pays the previous holder 85% of the sale price,
/// and refunds any overpayment. The remaining 15% stays with the contract as
/// a standing fee, withdrawable by the administrator.
///
/// ## Price escalation
///
/// The tier is selected on the price *before* the pending sale:
///
/// ```text
/// TIER TABLE (limits fixed at deployment):
///   ┌──────┬──────────────────────────────┬──────────────┐
///   │ Tier │ Pre-sale price range         │ Scale factor │
///   ├──────┼──────────────────────────────┼──────────────┤
///   │ 1    │ [0, tier1_limit)             │ ×200 / 100   │
///   │ 2    │ [tier1_limit, tier2_limit)   │ ×130 / 100   │
///   │ 3    │ [tier2_limit, ∞)             │ ×115 / 100   │
///   └──────┴──────────────────────────────┴──────────────┘
/// All division truncates toward zero.
/// ```
///
/// ## Holding model
///
/// Newly created bags are held by the contract itself (`Holder::Ledger`)
/// until first sold; the first sale retains the full payment since there is
/// no external seller to pay. There is no reserved "zero address" owner:
/// ledger inventory is an explicit typed state, and "no approval" is absence
/// from the approval mapping.
#[ink::contract]
mod bag_market {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    // =========================================================================
    // CONSTANTS
    // =========================================================================

    /// Denominator for the scale-factor and payout-share calculations.
    pub const SCALE_DENOMINATOR: Balance = 100;

    /// Tier 1 scale factor: price doubles while below `tier1_limit`.
    pub const TIER1_SCALE: Balance = 200;

    /// Tier 2 scale factor: +30% between `tier1_limit` and `tier2_limit`.
    pub const TIER2_SCALE: Balance = 130;

    /// Tier 3 scale factor: +15% at or above `tier2_limit`.
    pub const TIER3_SCALE: Balance = 115;

    /// Seller's share of every sale price (85%). The remaining 15% accrues
    /// to the contract balance as a standing fee.
    pub const SELLER_SHARE: Balance = 85;

    /// Rent placeholder written into every bag at creation. Reserved for a
    /// future accrual mechanism; never mutated by this contract.
    pub const INITIAL_RENT: Balance = 0;

    /// The reserved all-zero account. Rejected as a transfer recipient so a
    /// bag can never be parked on an unusable key.
    pub const NULL_ACCOUNT: [u8; 32] = [0u8; 32];

    // =========================================================================
    // TYPES
    // =========================================================================

    /// Current holder of a bag.
    ///
    /// `Ledger` marks inventory held by the contract itself (freshly created
    /// bags awaiting their first sale). A bag is never holderless after
    /// creation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub enum Holder {
        /// Held by the contract's own inventory.
        Ledger,
        /// Held by an external account.
        Account(AccountId),
    }

    impl Holder {
        /// The external account behind this holder, if any.
        pub fn account(self) -> Option<AccountId> {
            match self {
                Holder::Ledger => None,
                Holder::Account(account) => Some(account),
            }
        }
    }

    /// One asset record. Append-only: `price` is the only field ever
    /// rewritten after creation.
    #[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct Bag {
        /// Immutable display name.
        pub name: String,
        /// Current listed price; rewritten by the pricing engine on sale.
        pub price: Balance,
        /// Reserved accrual field, fixed to `INITIAL_RENT` at creation.
        pub rent: Balance,
    }

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct BagMarket {
        // ── Asset registry ────────────────────────────────────────────────
        /// Bag records, densely indexed `0..bag_count`.
        bags: Mapping<u32, Bag>,
        /// Number of bags created so far; also the next identifier.
        bag_count: u32,

        // ── Ownership ledger ──────────────────────────────────────────────
        /// Current holder per bag. Every bag in `0..bag_count` has an entry.
        holders: Mapping<u32, Holder>,
        /// Single approved transferee per bag; absent = no approval.
        approvals: Mapping<u32, AccountId>,
        /// Count of bags held per external account.
        holdings: Mapping<AccountId, u32>,

        // ── Pricing configuration (fixed at deployment) ───────────────────
        /// Listed price assigned to every newly created bag.
        starting_price: Balance,
        /// Upper bound (exclusive) of the doubling tier.
        tier1_limit: Balance,
        /// Upper bound (exclusive) of the +30% tier.
        tier2_limit: Balance,

        // ── Access control ────────────────────────────────────────────────
        /// The single privileged account: creates bags, reassigns the role,
        /// withdraws the retained fee balance.
        admin: AccountId,

        // ── Safety ────────────────────────────────────────────────────────
        paused: bool,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Emitted when a new bag enters the registry.
    #[ink(event)]
    pub struct Birth {
        #[ink(topic)]
        bag_id: u32,
        name: String,
        holder: Holder,
    }

    /// Emitted on every direct ownership move (`transfer`, `take_ownership`,
    /// `transfer_from`). `None` marks the ledger's own inventory.
    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        bag_id: u32,
    }

    /// Emitted when the owner grants or revokes the approved transferee.
    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        approved: Option<AccountId>,
        bag_id: u32,
    }

    /// Emitted on every successful purchase.
    #[ink(event)]
    pub struct Sale {
        #[ink(topic)]
        bag_id: u32,
        old_price: Balance,
        new_price: Balance,
        old_holder: Holder,
        #[ink(topic)]
        new_owner: AccountId,
        name: String,
    }

    /// Emitted when the administrator role is reassigned.
    #[ink(event)]
    pub struct AdministratorChanged {
        #[ink(topic)]
        previous: AccountId,
        #[ink(topic)]
        updated: AccountId,
    }

    /// Emitted when the administrator drains the retained fee balance.
    #[ink(event)]
    pub struct Withdrawal {
        #[ink(topic)]
        to: AccountId,
        amount: Balance,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Caller is not the administrator.
        NotAdministrator,
        /// Caller lacks the ownership or approval the operation requires.
        Unauthorized,
        /// Recipient is the reserved null account.
        InvalidRecipient,
        /// Attached value is below the current listed price.
        InsufficientPayment,
        /// Caller already holds the bag.
        SelfPurchase,
        /// No bag exists under the given identifier.
        BagNotFound,
        /// The bag has no recorded holder.
        NoOwner,
        /// The 32-bit identifier space is exhausted.
        IdSpaceExhausted,
        /// Tier limits are misordered: `tier1_limit` exceeds `tier2_limit`.
        InvalidTierLimits,
        /// An addition or multiplication overflowed.
        ArithmeticOverflow,
        /// A subtraction underflowed.
        ArithmeticUnderflow,
        /// A division by zero was attempted.
        DivisionByZero,
        /// A native value transfer (payout or refund) failed.
        TransferFailed,
        /// Contract is paused.
        ContractPaused,
    }

    // =========================================================================
    // ARITHMETIC SAFETY LAYER
    // =========================================================================
    //
    // All money movement goes through these four. Any failure aborts the
    // enclosing message, which reverts every state change of the call.

    fn safe_add(a: Balance, b: Balance) -> Result<Balance, Error> {
        a.checked_add(b).ok_or(Error::ArithmeticOverflow)
    }

    fn safe_sub(a: Balance, b: Balance) -> Result<Balance, Error> {
        a.checked_sub(b).ok_or(Error::ArithmeticUnderflow)
    }

    fn safe_mul(a: Balance, b: Balance) -> Result<Balance, Error> {
        a.checked_mul(b).ok_or(Error::ArithmeticOverflow)
    }

    fn safe_div(a: Balance, b: Balance) -> Result<Balance, Error> {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(a / b)
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl BagMarket {
        // ---------------------------------------------------------------------
        // Constructor
        // ---------------------------------------------------------------------

        /// Deploy the market. The deployer becomes the administrator.
        ///
        /// `starting_price` is assigned to every newly created bag;
        /// `tier1_limit` and `tier2_limit` bound the escalation tiers.
        /// All three are fixed for the contract's lifetime.
        ///
        /// # Errors
        /// - [`Error::InvalidTierLimits`] — `tier1_limit` exceeds
        ///   `tier2_limit`, which would make the +30% tier unreachable.
        #[ink(constructor)]
        pub fn new(
            starting_price: Balance,
            tier1_limit: Balance,
            tier2_limit: Balance,
        ) -> Result<Self, Error> {
            if tier1_limit > tier2_limit {
                return Err(Error::InvalidTierLimits);
            }
            let caller = Self::env().caller();
            Ok(Self {
                bags: Mapping::default(),
                bag_count: 0,
                holders: Mapping::default(),
                approvals: Mapping::default(),
                holdings: Mapping::default(),
                starting_price,
                tier1_limit,
                tier2_limit,
                admin: caller,
                paused: false,
            })
        }

        // =====================================================================
        // ASSET REGISTRY
        // =====================================================================

        /// Create a new bag, held by the contract's own inventory at the
        /// configured starting price.
        ///
        /// **Caller:** Administrator only.
        ///
        /// Identifiers are assigned sequentially from zero and never reused.
        /// Creation is refused once the 32-bit identifier space is exhausted;
        /// all previously created bags remain valid.
        ///
        /// # Errors
        /// - [`Error::NotAdministrator`] — caller is not the administrator.
        /// - [`Error::IdSpaceExhausted`] — identifier space is exhausted.
        /// - [`Error::ContractPaused`]   — contract is paused.
        #[ink(message)]
        pub fn create_bag(&mut self, name: String) -> Result<u32, Error> {
            self.assert_not_paused()?;
            self.only_admin()?;

            if self.bag_count == u32::MAX {
                return Err(Error::IdSpaceExhausted);
            }
            let bag_id = self.bag_count;

            let bag = Bag {
                name: name.clone(),
                price: self.starting_price,
                rent: INITIAL_RENT,
            };
            self.bags.insert(bag_id, &bag);
            self.holders.insert(bag_id, &Holder::Ledger);
            self.bag_count = bag_id + 1;

            self.env().emit_event(Birth {
                bag_id,
                name,
                holder: Holder::Ledger,
            });

            Ok(bag_id)
        }

        // =====================================================================
        // PURCHASE WORKFLOW
        // =====================================================================

        /// Buy a bag at its listed price.
        ///
        /// **Payable.** The attached value must be at least the listed price;
        /// any excess is refunded to the caller in the same call.
        ///
        /// ```text
        /// paid        = transferred value
        /// payout      = old_price × 85 / 100     → previous holder
        ///               (retained when the ledger itself was the holder)
        /// fee         = old_price − payout       → stays with the contract
        /// refund      = paid − old_price         → back to the caller
        /// new_price   = old_price × scale(tier) / 100
        ///               (tier selected on the pre-sale price)
        /// ```
        ///
        /// The call is all-or-nothing: a failed payout or refund reverts the
        /// ownership transfer and the price update as well.
        ///
        /// # Errors
        /// - [`Error::BagNotFound`]         — no bag under `bag_id`.
        /// - [`Error::SelfPurchase`]        — caller already holds the bag.
        /// - [`Error::InvalidRecipient`]    — caller is the null account.
        /// - [`Error::InsufficientPayment`] — attached value below the price.
        /// - [`Error::TransferFailed`]      — payout or refund delivery failed.
        /// - [`Error::ContractPaused`]      — contract is paused.
        #[ink(message, payable)]
        pub fn purchase(&mut self, bag_id: u32) -> Result<(), Error> {
            self.assert_not_paused()?;

            let caller = self.env().caller();
            let paid = self.env().transferred_value();

            let mut bag = self.bags.get(bag_id).ok_or(Error::BagNotFound)?;
            let old_holder = self.holders.get(bag_id).ok_or(Error::NoOwner)?;

            if old_holder == Holder::Account(caller) {
                return Err(Error::SelfPurchase);
            }
            if caller == AccountId::from(NULL_ACCOUNT) {
                return Err(Error::InvalidRecipient);
            }

            let old_price = bag.price;
            if paid < old_price {
                return Err(Error::InsufficientPayment);
            }

            let payout = self.seller_payout(old_price)?;
            // Cannot underflow past the guard above; safe_sub keeps the
            // payment path on the checked layer regardless.
            let refund = safe_sub(paid, old_price)?;

            let new_price = self.next_price(old_price)?;
            bag.price = new_price;
            self.bags.insert(bag_id, &bag);

            self.record_transfer(old_holder, caller, bag_id)?;

            // First sale from the ledger's own inventory has no external
            // seller; the full payment is retained.
            if let Holder::Account(seller) = old_holder {
                self.env()
                    .transfer(seller, payout)
                    .map_err(|_| Error::TransferFailed)?;
            }

            self.env().emit_event(Sale {
                bag_id,
                old_price,
                new_price,
                old_holder,
                new_owner: caller,
                name: bag.name,
            });

            if refund > 0 {
                self.env()
                    .transfer(caller, refund)
                    .map_err(|_| Error::TransferFailed)?;
            }

            Ok(())
        }

        // =====================================================================
        // TRANSFER PROTOCOL
        // =====================================================================

        /// Grant `to` the exclusive right to take ownership of `bag_id`, or
        /// revoke the standing approval with `None`.
        ///
        /// Single slot, last write wins. Any approval is cleared
        /// automatically when ownership changes.
        ///
        /// **Caller:** Current owner of the bag.
        ///
        /// # Errors
        /// - [`Error::Unauthorized`]     — caller does not own the bag.
        /// - [`Error::InvalidRecipient`] — `to` is the null account.
        /// - [`Error::ContractPaused`]   — contract is paused.
        #[ink(message)]
        pub fn approve(
            &mut self,
            to: Option<AccountId>,
            bag_id: u32,
        ) -> Result<(), Error> {
            self.assert_not_paused()?;

            let caller = self.env().caller();
            if self.holder_of(bag_id)? != Holder::Account(caller) {
                return Err(Error::Unauthorized);
            }

            match to {
                Some(account) => {
                    if account == AccountId::from(NULL_ACCOUNT) {
                        return Err(Error::InvalidRecipient);
                    }
                    self.approvals.insert(bag_id, &account);
                }
                None => self.approvals.remove(bag_id),
            }

            self.env().emit_event(Approval {
                owner: caller,
                approved: to,
                bag_id,
            });

            Ok(())
        }

        /// Move a bag directly to `to`.
        ///
        /// **Caller:** Current owner of the bag.
        ///
        /// # Errors
        /// - [`Error::Unauthorized`]     — caller does not own the bag.
        /// - [`Error::InvalidRecipient`] — `to` is the null account.
        /// - [`Error::ContractPaused`]   — contract is paused.
        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, bag_id: u32) -> Result<(), Error> {
            self.assert_not_paused()?;

            let caller = self.env().caller();
            if self.holder_of(bag_id)? != Holder::Account(caller) {
                return Err(Error::Unauthorized);
            }
            if to == AccountId::from(NULL_ACCOUNT) {
                return Err(Error::InvalidRecipient);
            }

            self.record_transfer(Holder::Account(caller), to, bag_id)?;

            self.env().emit_event(Transfer {
                from: Some(caller),
                to: Some(to),
                bag_id,
            });

            Ok(())
        }

        /// Claim a bag for which the caller is the approved transferee.
        ///
        /// # Errors
        /// - [`Error::InvalidRecipient`] — caller is the null account.
        /// - [`Error::Unauthorized`]     — caller is not the approved
        ///   transferee of the bag.
        /// - [`Error::ContractPaused`]   — contract is paused.
        #[ink(message)]
        pub fn take_ownership(&mut self, bag_id: u32) -> Result<(), Error> {
            self.assert_not_paused()?;

            let caller = self.env().caller();
            if caller == AccountId::from(NULL_ACCOUNT) {
                return Err(Error::InvalidRecipient);
            }
            if self.approvals.get(bag_id) != Some(caller) {
                return Err(Error::Unauthorized);
            }

            let previous = self.holder_of(bag_id)?;
            self.record_transfer(previous, caller, bag_id)?;

            self.env().emit_event(Transfer {
                from: previous.account(),
                to: Some(caller),
                bag_id,
            });

            Ok(())
        }

        /// Move a bag from `from` to the approved transferee `to` on their
        /// behalf.
        ///
        /// # Errors
        /// - [`Error::InvalidRecipient`] — `to` is the null account.
        /// - [`Error::Unauthorized`]     — `from` does not own the bag, or
        ///   `to` is not the approved transferee.
        /// - [`Error::ContractPaused`]   — contract is paused.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            bag_id: u32,
        ) -> Result<(), Error> {
            self.assert_not_paused()?;

            if to == AccountId::from(NULL_ACCOUNT) {
                return Err(Error::InvalidRecipient);
            }
            if self.holder_of(bag_id)? != Holder::Account(from) {
                return Err(Error::Unauthorized);
            }
            if self.approvals.get(bag_id) != Some(to) {
                return Err(Error::Unauthorized);
            }

            self.record_transfer(Holder::Account(from), to, bag_id)?;

            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                bag_id,
            });

            Ok(())
        }

        // =====================================================================
        // VIEW FUNCTIONS
        // =====================================================================

        /// Full projection of one bag: `(name, price, holder, rent)`.
        #[ink(message)]
        pub fn get_bag(
            &self,
            bag_id: u32,
        ) -> Result<(String, Balance, Holder, Balance), Error> {
            let bag = self.bags.get(bag_id).ok_or(Error::BagNotFound)?;
            let holder = self.holder_of(bag_id)?;
            Ok((bag.name, bag.price, holder, bag.rent))
        }

        /// Current holder of a bag.
        #[ink(message)]
        pub fn owner_of(&self, bag_id: u32) -> Result<Holder, Error> {
            self.holder_of(bag_id)
        }

        /// Number of bags held by `account`. Zero for any account that never
        /// held one.
        #[ink(message)]
        pub fn balance_of(&self, account: AccountId) -> u32 {
            self.holdings.get(account).unwrap_or(0)
        }

        /// Current listed price of a bag.
        #[ink(message)]
        pub fn price_of(&self, bag_id: u32) -> Result<Balance, Error> {
            self.bags
                .get(bag_id)
                .map(|bag| bag.price)
                .ok_or(Error::BagNotFound)
        }

        /// The price the bag will list at after its next sale.
        #[ink(message)]
        pub fn preview_next_price(&self, bag_id: u32) -> Result<Balance, Error> {
            let price = self.price_of(bag_id)?;
            self.next_price(price)
        }

        /// Approved transferee of a bag, if any.
        #[ink(message)]
        pub fn approved_of(&self, bag_id: u32) -> Result<Option<AccountId>, Error> {
            if bag_id >= self.bag_count {
                return Err(Error::BagNotFound);
            }
            Ok(self.approvals.get(bag_id))
        }

        /// Number of bags created so far.
        #[ink(message)]
        pub fn total_supply(&self) -> u32 {
            self.bag_count
        }

        #[ink(message)]
        pub fn get_administrator(&self) -> AccountId {
            self.admin
        }

        /// Returns `(tier1_limit, tier2_limit)`.
        #[ink(message)]
        pub fn get_tier_limits(&self) -> (Balance, Balance) {
            (self.tier1_limit, self.tier2_limit)
        }

        #[ink(message)]
        pub fn get_starting_price(&self) -> Balance {
            self.starting_price
        }

        #[ink(message)]
        pub fn is_paused(&self) -> bool {
            self.paused
        }

        // =====================================================================
        // ADMIN
        // =====================================================================

        /// Reassign the administrator role.
        ///
        /// **Caller:** Current administrator only. The previous holder loses
        /// the role in the same call.
        #[ink(message)]
        pub fn set_administrator(&mut self, new_admin: AccountId) -> Result<(), Error> {
            self.only_admin()?;
            if new_admin == AccountId::from(NULL_ACCOUNT) {
                return Err(Error::InvalidRecipient);
            }
            let previous = self.admin;
            self.admin = new_admin;
            self.env().emit_event(AdministratorChanged {
                previous,
                updated: new_admin,
            });
            Ok(())
        }

        /// Drain the contract's entire retained balance (accumulated 15%
        /// fees and inventory sale proceeds) to `to`, or to the
        /// administrator when `None`.
        ///
        /// **Caller:** Administrator only.
        #[ink(message)]
        pub fn withdraw(&mut self, to: Option<AccountId>) -> Result<Balance, Error> {
            self.only_admin()?;

            let dest = to.unwrap_or(self.admin);
            if dest == AccountId::from(NULL_ACCOUNT) {
                return Err(Error::InvalidRecipient);
            }

            let amount = self.env().balance();
            self.env()
                .transfer(dest, amount)
                .map_err(|_| Error::TransferFailed)?;

            self.env().emit_event(Withdrawal { to: dest, amount });

            Ok(amount)
        }

        #[ink(message)]
        pub fn set_paused(&mut self, paused: bool) -> Result<(), Error> {
            self.only_admin()?;
            self.paused = paused;
            Ok(())
        }

        // =====================================================================
        // PRICING ENGINE
        // =====================================================================

        /// Next listed price for a bag currently priced at `price`.
        /// The tier is selected on the pre-sale price.
        fn next_price(&self, price: Balance) -> Result<Balance, Error> {
            let scale = if price < self.tier1_limit {
                TIER1_SCALE
            } else if price < self.tier2_limit {
                TIER2_SCALE
            } else {
                TIER3_SCALE
            };
            safe_div(safe_mul(price, scale)?, SCALE_DENOMINATOR)
        }

        /// The previous holder's share of a sale: 85% of the sale price,
        /// truncated.
        fn seller_payout(&self, price: Balance) -> Result<Balance, Error> {
            safe_div(safe_mul(price, SELLER_SHARE)?, SCALE_DENOMINATOR)
        }

        // =====================================================================
        // INTERNAL HELPERS
        // =====================================================================

        /// Holder lookup with a defensive range check. Every bag in
        /// `0..bag_count` has a holder entry; a populated identifier without
        /// one is an invariant breach surfaced as `NoOwner`.
        fn holder_of(&self, bag_id: u32) -> Result<Holder, Error> {
            if bag_id >= self.bag_count {
                return Err(Error::BagNotFound);
            }
            self.holders.get(bag_id).ok_or(Error::NoOwner)
        }

        /// The single mutation point for ownership changes.
        ///
        /// Credits `to`, rewrites the holder entry, debits the previous
        /// external holder, and clears any standing approval. Called exactly
        /// once per ownership change.
        fn record_transfer(
            &mut self,
            from: Holder,
            to: AccountId,
            bag_id: u32,
        ) -> Result<(), Error> {
            let to_count = self.holdings.get(to).unwrap_or(0);
            let to_count = to_count.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
            self.holdings.insert(to, &to_count);

            self.holders.insert(bag_id, &Holder::Account(to));

            if let Holder::Account(previous) = from {
                let prev_count = self.holdings.get(previous).unwrap_or(0);
                let prev_count = prev_count
                    .checked_sub(1)
                    .ok_or(Error::ArithmeticUnderflow)?;
                self.holdings.insert(previous, &prev_count);
            }

            // No approval outlives the ownership it was granted against.
            self.approvals.remove(bag_id);

            Ok(())
        }

        fn only_admin(&self) -> Result<(), Error> {
            if self.env().caller() != self.admin {
                return Err(Error::NotAdministrator);
            }
            Ok(())
        }

        fn assert_not_paused(&self) -> Result<(), Error> {
            if self.paused {
                return Err(Error::ContractPaused);
            }
            Ok(())
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
