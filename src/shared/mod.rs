pub mod arabic_search;
