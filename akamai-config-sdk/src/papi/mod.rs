//! Property Manager (`/papi/v0`) contracts and products

mod contracts;
mod products;

use std::sync::Arc;

use crate::error::{ClientError, Result};
use crate::traits::{ApiTransport, get_json};

pub use contracts::{Contract, ContractItems, Contracts};
pub use products::{Product, ProductItems, Products};

const CONTRACTS_PATH: &str = "/papi/v0/contracts";
const PRODUCTS_PATH: &str = "/papi/v0/products";

/// Property Manager API group.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use akamai_config_sdk::{EdgeGridClient, PapiApi};
///
/// # async fn example() -> akamai_config_sdk::Result<()> {
/// let papi = PapiApi::new(Arc::new(EdgeGridClient::from_edgerc("/home/me/.edgerc", "papi")?));
///
/// let contracts = papi.fetch_contracts().await?;
/// for contract in contracts.items() {
///     let products = papi.fetch_products(contract).await?;
///     println!("{}: {} products", contract.contract_id, products.items().len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PapiApi {
    transport: Arc<dyn ApiTransport>,
}

impl PapiApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// List the account's contracts, with parent links wired.
    pub async fn fetch_contracts(&self) -> Result<Contracts> {
        let mut contracts: Contracts = get_json(self.transport.as_ref(), CONTRACTS_PATH).await?;
        contracts.link_parents();
        log::debug!(
            "[{}] Fetched {} contracts",
            contracts.account_id,
            contracts.items().len()
        );
        Ok(contracts)
    }

    /// Fetch one contract by id.
    ///
    /// Lists all contracts and searches the result; an id that isn't listed
    /// yields [`ClientError::ContractNotFound`].
    pub async fn fetch_contract(&self, contract_id: &str) -> Result<Contract> {
        self.fetch_contracts()
            .await?
            .into_contract(contract_id)
            .ok_or_else(|| {
                log::warn!("Contract '{contract_id}' not found");
                ClientError::ContractNotFound {
                    contract_id: contract_id.to_string(),
                }
            })
    }

    /// List the products of `contract`, with parent links wired.
    pub async fn fetch_products(&self, contract: &Contract) -> Result<Products> {
        let path = format!(
            "{PRODUCTS_PATH}?contractId={}",
            urlencoding::encode(&contract.contract_id)
        );
        let mut products: Products = get_json(self.transport.as_ref(), &path).await?;
        products.link_parents();
        log::debug!(
            "[{}] Fetched {} products",
            contract.contract_id,
            products.items().len()
        );
        Ok(products)
    }
}
