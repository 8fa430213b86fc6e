//! Property Manager contracts

use serde::{Deserialize, Serialize};

/// Contracts visible to the authenticated account.
///
/// Wire shape: `{"accountId": "...", "contracts": {"items": [...]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contracts {
    pub account_id: String,
    pub contracts: ContractItems,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractItems {
    #[serde(default)]
    pub items: Vec<Contract>,
}

/// One contract of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Owning account, set by [`Contracts::link_parents`]. Not part of the wire format.
    #[serde(skip)]
    account_id: Option<String>,
    pub contract_id: String,
    pub contract_type_name: String,
}

impl Contracts {
    /// Point every contract back at this account.
    ///
    /// Runs once after decoding; the serde derive does not do it.
    pub(crate) fn link_parents(&mut self) {
        for contract in &mut self.contracts.items {
            contract.account_id = Some(self.account_id.clone());
        }
    }

    pub fn items(&self) -> &[Contract] {
        &self.contracts.items
    }

    /// Look up a contract by id.
    pub fn find(&self, contract_id: &str) -> Option<&Contract> {
        self.contracts
            .items
            .iter()
            .find(|c| c.contract_id == contract_id)
    }

    pub(crate) fn into_contract(self, contract_id: &str) -> Option<Contract> {
        self.contracts
            .items
            .into_iter()
            .find(|c| c.contract_id == contract_id)
    }
}

impl Contract {
    pub fn new(contract_id: impl Into<String>, contract_type_name: impl Into<String>) -> Self {
        Self {
            account_id: None,
            contract_id: contract_id.into(),
            contract_type_name: contract_type_name.into(),
        }
    }

    /// Id of the owning [`Contracts`]; `None` for a contract built by hand.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }
}
