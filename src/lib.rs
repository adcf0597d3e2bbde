//! # hoopfacts
//!
//! The Basketball Curiosities skill: localized canned responses and random
//! basketball facts, dispatched from voice-platform request envelopes.

pub mod facts;
pub mod i18n;
pub mod skill;
