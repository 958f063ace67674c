use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    MedicationNotFound = 4,
    ItemNotFound = 5,
    ItemAlreadyExists = 6,
    OrderNotFound = 7,
    InvalidQuantity = 8,
    InvalidPrice = 9,
    InvalidStatusTransition = 10,
    OrderNotApproved = 11,
    InsufficientStock = 12,
}

/// Lifecycle status of an inter-department stock request.
///
/// Pending orders are approved or cancelled by pharmacy staff; approved
/// orders are fulfilled against inventory or cancelled. Fulfilled and
/// Cancelled are terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OrderStatus {
    Pending,
    Approved,
    Fulfilled,
    Cancelled,
}

impl OrderStatus {
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        matches!(
            (self, target),
            (OrderStatus::Pending, OrderStatus::Approved)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Approved, OrderStatus::Fulfilled)
                | (OrderStatus::Approved, OrderStatus::Cancelled)
        )
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OrderUrgency {
    Normal,
    Urgent,
    Emergency,
}

/// Pharmacy stock level for one catalog medication. One row per
/// medication; "low stock" is derived as quantity <= reorder_level.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryItem {
    pub medication_id: u64,
    pub quantity: u32,
    pub reorder_level: u32,
    pub unit_price: i128,
    pub batch_number: String,
    pub expiry_date: u64,
    pub created_at: u64,
    pub updated_at: u64,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

/// An inter-department stock request raised by hospital staff and worked
/// off by pharmacy staff.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HospitalOrder {
    pub id: u64,
    pub medication_id: u64,
    pub ordered_by: Address,
    pub quantity: u32,
    pub urgency: OrderUrgency,
    pub status: OrderStatus,
    pub notes: String,
    pub approved_by: Option<Address>,
    pub approved_at: Option<u64>,
    pub fulfilled_by: Option<Address>,
    pub fulfilled_at: Option<u64>,
    pub cancel_reason: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address of the access-control contract, set at init.
    AccessControl,
    /// Address of the medication-catalog contract, set at init.
    MedicationCatalog,
    /// medication_id -> InventoryItem
    Item(u64),
    /// Vec<u64> of medication ids with inventory rows.
    AllItems,
    /// Auto-increment counter for order ids.
    OrderCounter,
    /// order_id -> HospitalOrder
    Order(u64),
    /// Count of orders still pending, for dashboards.
    PendingOrders,
}
