pub mod a001_category;
pub mod a002_cluster;
pub mod a003_facility;
pub mod a004_product;
pub mod a005_campaign;
