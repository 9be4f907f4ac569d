use resource_store::{Id, Resource};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<Id<Order>>,
    pub customer: String,
    pub total_cents: u64,
}

impl Order {
    pub fn new(customer: &str, total_cents: u64) -> Self {
        Order {
            id: None,
            customer: customer.to_string(),
            total_cents,
        }
    }
}

impl Resource for Order {
    fn id(&self) -> Option<Id<Self>> {
        self.id
    }

    fn set_id(&mut self, id: Id<Self>) {
        self.id = Some(id);
    }
}
