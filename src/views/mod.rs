pub mod award_detail;
pub mod awards;
pub mod cards;
pub mod carousel;
pub mod controls;
pub mod game_detail;
pub mod games;
pub mod home;
pub mod hooks;
pub mod nav;
