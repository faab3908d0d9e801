pub mod contact;
pub mod extra;
pub mod license;
pub mod package;
pub mod tag;

pub use contact::{AuthorRef, Contact, Source};
pub use extra::Extra;
pub use license::{License, LicenseRef};
pub use package::{DataPackage, PackageResource, ResourceSource};
pub use tag::Tag;
