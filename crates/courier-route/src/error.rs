use courier_core::ParcelId;
use courier_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("graph has {graph} vertices but the address list has {addresses} entries")]
    AddressCountMismatch { graph: usize, addresses: usize },

    #[error("parcel {parcel} addressed to {address:?}, which is not in the address list")]
    UnknownAddress { parcel: ParcelId, address: String },

    #[error("parcel {0} not found in the manifest")]
    UnknownParcel(ParcelId),

    #[error("routing failed: {0}")]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
