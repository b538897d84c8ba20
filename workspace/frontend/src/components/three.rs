pub mod card_mesh;

pub use card_mesh::CardMesh;
