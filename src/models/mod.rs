pub mod comment;
pub mod filter;
pub mod forum;
pub mod gallery;
pub mod image;
pub mod oembed;
pub mod tag;
pub mod user;

pub(crate) mod macros {
    macro_rules! str_opt_ref {
        ($x:expr) => {
            $x.as_ref().map(|x| x.as_ref())
        };
    }

    pub(crate) use str_opt_ref;
}
