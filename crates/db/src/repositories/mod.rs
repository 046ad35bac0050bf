mod tutorial_repo;

pub use tutorial_repo::TutorialRepo;
