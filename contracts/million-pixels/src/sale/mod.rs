mod listing;
mod purchase;
