pub mod academics;
pub mod admission;
pub mod calendar;
pub mod campus;
pub mod content;
pub mod lenient;
pub mod people;
pub mod programs;
pub mod school;
pub mod sections;
pub mod site;
pub mod tenant;
pub mod view;
