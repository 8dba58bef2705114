mod floorplan_tests;
mod paginator_tests;
