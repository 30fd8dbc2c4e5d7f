pub mod auth_services;
pub mod feed_paginator;
pub mod session_manager;
pub mod token_store;
