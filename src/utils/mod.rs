pub mod serde_flex;
