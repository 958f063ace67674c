#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;

use access_control::{AccessControlClient, Role};
use medication_catalog::MedicationCatalogClient;

pub use types::{Error, HospitalOrder, InventoryItem, OrderStatus, OrderUrgency};
use types::DataKey;

#[contract]
pub struct PharmacyInventory;

#[contractimpl]
impl PharmacyInventory {
    pub fn init(
        env: Env,
        access_control: Address,
        medication_catalog: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::AccessControl) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DataKey::AccessControl, &access_control);
        env.storage()
            .instance()
            .set(&DataKey::MedicationCatalog, &medication_catalog);
        Ok(())
    }

    // -------------------------------------------------------------------
    // Inventory
    // -------------------------------------------------------------------

    /// Open a stock row for a catalog medication. Pharmacy staff or admin;
    /// one row per medication.
    pub fn add_inventory_item(
        env: Env,
        caller: Address,
        medication_id: u64,
        quantity: u32,
        reorder_level: u32,
        unit_price: i128,
        batch_number: String,
        expiry_date: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;

        if unit_price < 0 {
            return Err(Error::InvalidPrice);
        }

        let catalog = Self::medication_catalog(&env)?;
        if !catalog.has_medication(&medication_id) {
            return Err(Error::MedicationNotFound);
        }
        if load_item(&env, medication_id).is_some() {
            return Err(Error::ItemAlreadyExists);
        }

        let now = env.ledger().timestamp();
        let item = InventoryItem {
            medication_id,
            quantity,
            reorder_level,
            unit_price,
            batch_number,
            expiry_date,
            created_at: now,
            updated_at: now,
        };
        save_item(&env, &item);
        add_to_item_list(&env, medication_id);

        env.events()
            .publish((symbol_short!("inv_add"), medication_id), quantity);

        Ok(())
    }

    /// Add received stock to an existing row.
    pub fn restock(
        env: Env,
        caller: Address,
        medication_id: u64,
        amount: u32,
    ) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;

        if amount == 0 {
            return Err(Error::InvalidQuantity);
        }

        let mut item = load_item(&env, medication_id).ok_or(Error::ItemNotFound)?;
        item.quantity += amount;
        item.updated_at = env.ledger().timestamp();
        save_item(&env, &item);

        env.events()
            .publish((symbol_short!("inv_rst"), medication_id), item.quantity);

        Ok(item.quantity)
    }

    /// Signed stock correction (recount, damage, expiry write-off). The
    /// corrected quantity may not go below zero.
    pub fn adjust_stock(
        env: Env,
        caller: Address,
        medication_id: u64,
        delta: i64,
        reason: String,
    ) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;

        if delta == 0 || reason.is_empty() {
            return Err(Error::InvalidQuantity);
        }

        let mut item = load_item(&env, medication_id).ok_or(Error::ItemNotFound)?;
        let adjusted = item.quantity as i64 + delta;
        if adjusted < 0 {
            return Err(Error::InvalidQuantity);
        }
        item.quantity = adjusted as u32;
        item.updated_at = env.ledger().timestamp();
        save_item(&env, &item);

        env.events()
            .publish((symbol_short!("inv_adj"), medication_id), delta);

        Ok(item.quantity)
    }

    /// Update the non-quantity attributes of a stock row.
    pub fn update_inventory_item(
        env: Env,
        caller: Address,
        medication_id: u64,
        reorder_level: u32,
        unit_price: i128,
        batch_number: String,
        expiry_date: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;

        if unit_price < 0 {
            return Err(Error::InvalidPrice);
        }

        let mut item = load_item(&env, medication_id).ok_or(Error::ItemNotFound)?;
        item.reorder_level = reorder_level;
        item.unit_price = unit_price;
        item.batch_number = batch_number;
        item.expiry_date = expiry_date;
        item.updated_at = env.ledger().timestamp();
        save_item(&env, &item);

        env.events()
            .publish((symbol_short!("inv_upd"), medication_id), caller);

        Ok(())
    }

    /// Read a stock row. Pharmacy staff or admin.
    pub fn get_inventory_item(
        env: Env,
        caller: Address,
        medication_id: u64,
    ) -> Result<InventoryItem, Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;
        load_item(&env, medication_id).ok_or(Error::ItemNotFound)
    }

    /// Dashboard count of rows at or below their reorder level.
    pub fn low_stock_count(env: Env, caller: Address) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;

        let mut count = 0;
        for medication_id in item_ids(&env).iter() {
            if let Some(item) = load_item(&env, medication_id) {
                if item.is_low_stock() {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    // -------------------------------------------------------------------
    // Hospital orders
    // -------------------------------------------------------------------

    /// Raise a stock request. Hospital staff or admin; quantity must be
    /// positive and the medication must exist in the catalog.
    pub fn place_order(
        env: Env,
        caller: Address,
        medication_id: u64,
        quantity: u32,
        urgency: OrderUrgency,
        notes: String,
    ) -> Result<u64, Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }
        let catalog = Self::medication_catalog(&env)?;
        if !catalog.has_medication(&medication_id) {
            return Err(Error::MedicationNotFound);
        }

        let id = next_order_id(&env);
        let now = env.ledger().timestamp();
        let order = HospitalOrder {
            id,
            medication_id,
            ordered_by: caller.clone(),
            quantity,
            urgency,
            status: OrderStatus::Pending,
            notes,
            approved_by: None,
            approved_at: None,
            fulfilled_by: None,
            fulfilled_at: None,
            cancel_reason: String::from_str(&env, ""),
            created_at: now,
            updated_at: now,
        };
        save_order(&env, &order);
        bump_pending_orders(&env, 1);

        env.events()
            .publish((symbol_short!("ord_new"), id), (medication_id, quantity));

        Ok(id)
    }

    /// Approve a pending order. Pharmacy staff or admin.
    pub fn approve_order(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;

        let mut order = load_order(&env, id).ok_or(Error::OrderNotFound)?;
        if !order.status.can_transition_to(OrderStatus::Approved) {
            return Err(Error::InvalidStatusTransition);
        }

        let now = env.ledger().timestamp();
        order.status = OrderStatus::Approved;
        order.approved_by = Some(caller.clone());
        order.approved_at = Some(now);
        order.updated_at = now;
        save_order(&env, &order);
        bump_pending_orders(&env, -1);

        env.events().publish((symbol_short!("ord_apr"), id), caller);
        Ok(())
    }

    /// Cancel an order with a reason. Pharmacy staff and admins may cancel
    /// any pending or approved order; hospital staff may only withdraw
    /// their own order while it is still pending.
    pub fn cancel_order(
        env: Env,
        caller: Address,
        id: u64,
        reason: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut order = load_order(&env, id).ok_or(Error::OrderNotFound)?;

        if !Self::is_pharmacy_staff(&env, &caller)? {
            Self::require_hospital_staff(&env, &caller)?;
            if order.ordered_by != caller || order.status != OrderStatus::Pending {
                return Err(Error::NotAuthorized);
            }
        }

        if !order.status.can_transition_to(OrderStatus::Cancelled) {
            return Err(Error::InvalidStatusTransition);
        }

        let was_pending = order.status == OrderStatus::Pending;
        order.status = OrderStatus::Cancelled;
        order.cancel_reason = reason;
        order.updated_at = env.ledger().timestamp();
        save_order(&env, &order);
        if was_pending {
            bump_pending_orders(&env, -1);
        }

        env.events().publish((symbol_short!("ord_can"), id), caller);
        Ok(())
    }

    /// Fulfill an approved order in one atomic step: decrement the
    /// medication's stock by the order quantity, stamp fulfilled_by and
    /// fulfilled_at, and mark the order Fulfilled. If stock would go
    /// negative nothing is written and the order keeps its prior state.
    pub fn fulfill_order(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        Self::require_pharmacy_staff(&env, &caller)?;

        let mut order = load_order(&env, id).ok_or(Error::OrderNotFound)?;
        if order.status != OrderStatus::Approved {
            return Err(Error::OrderNotApproved);
        }

        let mut item = load_item(&env, order.medication_id).ok_or(Error::ItemNotFound)?;
        if item.quantity < order.quantity {
            return Err(Error::InsufficientStock);
        }

        let now = env.ledger().timestamp();
        item.quantity -= order.quantity;
        item.updated_at = now;
        save_item(&env, &item);

        order.status = OrderStatus::Fulfilled;
        order.fulfilled_by = Some(caller.clone());
        order.fulfilled_at = Some(now);
        order.updated_at = now;
        save_order(&env, &order);

        env.events()
            .publish((symbol_short!("ord_ful"), id), (order.medication_id, item.quantity));

        Ok(())
    }

    /// Read one order. Hospital staff, pharmacy staff, or admin.
    pub fn get_order(env: Env, caller: Address, id: u64) -> Result<HospitalOrder, Error> {
        caller.require_auth();
        Self::require_order_reader(&env, &caller)?;
        load_order(&env, id).ok_or(Error::OrderNotFound)
    }

    /// Dashboard count of orders still pending.
    pub fn pending_order_count(env: Env, caller: Address) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_order_reader(&env, &caller)?;
        Ok(pending_orders(&env))
    }

    // -------------------------------------------------------------------
    // Policy helpers
    // -------------------------------------------------------------------

    fn access_control(env: &Env) -> Result<AccessControlClient<'static>, Error> {
        let addr: Address = env
            .storage()
            .instance()
            .get(&DataKey::AccessControl)
            .ok_or(Error::NotInitialized)?;
        Ok(AccessControlClient::new(env, &addr))
    }

    fn medication_catalog(env: &Env) -> Result<MedicationCatalogClient<'static>, Error> {
        let addr: Address = env
            .storage()
            .instance()
            .get(&DataKey::MedicationCatalog)
            .ok_or(Error::NotInitialized)?;
        Ok(MedicationCatalogClient::new(env, &addr))
    }

    fn is_pharmacy_staff(env: &Env, caller: &Address) -> Result<bool, Error> {
        let ac = Self::access_control(env)?;
        let mut allowed = Vec::new(env);
        allowed.push_back(Role::PharmacyStaff);
        allowed.push_back(Role::Admin);
        Ok(ac.has_any_role(caller, &allowed))
    }

    fn require_pharmacy_staff(env: &Env, caller: &Address) -> Result<(), Error> {
        if !Self::is_pharmacy_staff(env, caller)? {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    fn require_hospital_staff(env: &Env, caller: &Address) -> Result<(), Error> {
        let ac = Self::access_control(env)?;
        let mut allowed = Vec::new(env);
        allowed.push_back(Role::HospitalStaff);
        allowed.push_back(Role::Admin);
        if !ac.has_any_role(caller, &allowed) {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    fn require_order_reader(env: &Env, caller: &Address) -> Result<(), Error> {
        let ac = Self::access_control(env)?;
        let mut allowed = Vec::new(env);
        allowed.push_back(Role::HospitalStaff);
        allowed.push_back(Role::PharmacyStaff);
        allowed.push_back(Role::Admin);
        if !ac.has_any_role(caller, &allowed) {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }
}
