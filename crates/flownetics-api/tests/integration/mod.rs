mod analysis;
mod blogs;
mod contact;
mod images;
mod newsletter;
mod reports;
