use crate::models::{CompletedProject, OngoingProject};

pub static COMPLETED_PROJECTS: [CompletedProject; 3] = [
    CompletedProject {
        name: "Residential Project 1",
        location: "Udumalpet",
        client: "Mr. Client 1",
        year: "2022",
        image: "project1.jpg",
    },
    CompletedProject {
        name: "Commercial Project 1",
        location: "Coimbatore",
        client: "Mr. Client 2",
        year: "2021",
        image: "project2.jpg",
    },
    CompletedProject {
        name: "Renovation Project 1",
        location: "Karur",
        client: "Mr. Client 3",
        year: "2023",
        image: "project3.jpg",
    },
];

pub static ONGOING_PROJECTS: [OngoingProject; 5] = [
    OngoingProject {
        name: "Udumalpet - Ravanapuram",
        location: "Udumalpet",
        client: "MR.Chandrakumar",
        status: 65,
        image: "ongoing1.jpg",
    },
    OngoingProject {
        name: "Karur - Velayuthampalayam",
        location: "Karur",
        client: "MR.Vishagar",
        status: 40,
        image: "ongoing2.jpg",
    },
    OngoingProject {
        name: "COIMBATORE - Annur",
        location: "Coimbatore",
        client: "MR. Gunaseelan",
        status: 25,
        image: "ongoing3.jpg",
    },
    OngoingProject {
        name: "COIMBATORE - KAARAMADAI",
        location: "Coimbatore",
        client: "MR.KOSURI SIVA",
        status: 80,
        image: "ongoing4.jpg",
    },
    OngoingProject {
        name: "DHARAPURAM - THILLAGOUNDANPUDHUR",
        location: "Dharapuram",
        client: "MR.JAYAPRAKASH",
        status: 50,
        image: "ongoing5.jpg",
    },
];

pub fn load_projects() -> (&'static [CompletedProject], &'static [OngoingProject]) {
    (&COMPLETED_PROJECTS, &ONGOING_PROJECTS)
}
