//! Roster catalog: the fixed collection of creatures and battle
//! environments, and the uniform matchup draw over them.
//!
//! The catalog is built once at startup and never mutated. Legendary
//! creatures and exotic environments are only drawn for premium sessions.

use crate::error::{GameError, GameResult};
use crate::types::{Dinosaur, Element, SoundKey, Tier};
use rand::Rng;

use crate::types::Element::{Earth, Sky, Water};
use crate::types::SoundKey::{GenericRoar, RaptorScreech, TrexRoar, TriceratopsBellow};

pub const BASIC_ENVIRONMENTS: [&str; 6] = [
    "Prehistoric Fern Forest",
    "Dried-up Desert Riverbed",
    "Misty Swamp at Dawn",
    "Rocky Mountain Pass",
    "Dense Jungle with heavy rain",
    "Tropical Beach with storm clouds",
];

pub const EXOTIC_ENVIRONMENTS: [&str; 10] = [
    "Volcanic Ashlands with flowing lava",
    "Frozen Tundra during a blizzard",
    "Bioluminescent Cave at night",
    "Meteor Impact Site with smoke",
    "Ancient Coral Reef",
    "Prehistoric Giant Mushroom Forest",
    "Primordial Emerald Jungle",
    "Floating Islands in the Sky",
    "Crystal Caverns",
    "Toxic Sulfur Pits",
];

/// Creatures locked behind the premium tier.
const LEGENDARY_NAMES: [&str; 12] = [
    "Tyrannosaurus Rex",
    "Spinosaurus",
    "Giganotosaurus",
    "Indominus Rex",
    "Mosasaurus",
    "Argentinosaurus",
    "Kronosaurus",
    "Carcharodontosaurus",
    "Dreadnoughtus",
    "Liopleurodon",
    "Dunkleosteus",
    "Sarcosuchus",
];

struct DinoSpec {
    name: &'static str,
    scientific: &'static str,
    blurb: &'static str,
    size: f64,
    speed: f64,
    attack: f64,
    element: Element,
    sound: SoundKey,
    aliases: &'static [&'static str],
}

#[rustfmt::skip]
const ROSTER: &[DinoSpec] = &[
    DinoSpec { name: "Tyrannosaurus Rex", scientific: "Tyrannosaurus rex", blurb: "The crushing tyrant of the late Cretaceous forests.", size: 12.0, speed: 25.0, attack: 10.0, element: Earth, sound: TrexRoar, aliases: &["T-Rex", "Rex"] },
    DinoSpec { name: "Velociraptor", scientific: "Velociraptor mongoliensis", blurb: "A sleek and deadly desert assassin.", size: 2.0, speed: 60.0, attack: 7.0, element: Earth, sound: RaptorScreech, aliases: &["Raptor"] },
    DinoSpec { name: "Triceratops", scientific: "Triceratops horridus", blurb: "An armored tank with a trio of lethal horns.", size: 9.0, speed: 30.0, attack: 8.0, element: Earth, sound: TriceratopsBellow, aliases: &["Trike"] },
    DinoSpec { name: "Stegosaurus", scientific: "Stegosaurus stenops", blurb: "A spiked fortress carrying a lethal tail weapon.", size: 9.0, speed: 10.0, attack: 6.0, element: Earth, sound: GenericRoar, aliases: &["Stego"] },
    DinoSpec { name: "Ankylosaurus", scientific: "Ankylosaurus magniventris", blurb: "An unbreakable living tank with a bone-crushing club.", size: 8.0, speed: 10.0, attack: 9.0, element: Earth, sound: GenericRoar, aliases: &["Anky"] },
    DinoSpec { name: "Spinosaurus", scientific: "Spinosaurus aegyptiacus", blurb: "A river monster with a massive sail.", size: 15.0, speed: 15.0, attack: 9.0, element: Water, sound: TrexRoar, aliases: &["Spino"] },
    DinoSpec { name: "Allosaurus", scientific: "Allosaurus fragilis", blurb: "The relentless lion of the Jurassic age.", size: 12.0, speed: 35.0, attack: 8.0, element: Earth, sound: RaptorScreech, aliases: &["Allo"] },
    DinoSpec { name: "Giganotosaurus", scientific: "Giganotosaurus carolinii", blurb: "A southern giant that hunted the largest land animals.", size: 13.0, speed: 50.0, attack: 10.0, element: Earth, sound: TrexRoar, aliases: &["Giga"] },
    DinoSpec { name: "Pteranodon", scientific: "Pteranodon longiceps", blurb: "The crested lord of the prehistoric skies.", size: 7.0, speed: 80.0, attack: 5.0, element: Sky, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Brachiosaurus", scientific: "Brachiosaurus altithorax", blurb: "A towering sentinel of the ancient forests.", size: 26.0, speed: 15.0, attack: 4.0, element: Earth, sound: TriceratopsBellow, aliases: &["Brachio"] },
    DinoSpec { name: "Dilophosaurus", scientific: "Dilophosaurus wetherilli", blurb: "A double-crested phantom of the early Jurassic.", size: 7.0, speed: 40.0, attack: 6.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Parasaurolophus", scientific: "Parasaurolophus walkeri", blurb: "A trumpet-crested communicator of the plains.", size: 10.0, speed: 40.0, attack: 5.0, element: Earth, sound: TriceratopsBellow, aliases: &["Para"] },
    DinoSpec { name: "Mosasaurus", scientific: "Mosasaurus hoffmannii", blurb: "The unstoppable leviathan of the deep.", size: 17.0, speed: 50.0, attack: 10.0, element: Water, sound: TrexRoar, aliases: &["Mosa"] },
    DinoSpec { name: "Argentinosaurus", scientific: "Argentinosaurus huinculensis", blurb: "A mountain that walked, shaking the earth.", size: 35.0, speed: 8.0, attack: 3.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Carnotaurus", scientific: "Carnotaurus sastrei", blurb: "A horned, sprinting demon of the south.", size: 8.0, speed: 55.0, attack: 8.0, element: Earth, sound: RaptorScreech, aliases: &["Carno"] },
    DinoSpec { name: "Iguanodon", scientific: "Iguanodon bernissartensis", blurb: "A versatile herbivore with a thumb-spike weapon.", size: 10.0, speed: 30.0, attack: 6.0, element: Earth, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Archaeopteryx", scientific: "Archaeopteryx lithographica", blurb: "The dawn-bird bridging reptiles and avians.", size: 1.0, speed: 20.0, attack: 2.0, element: Sky, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Pachycephalosaurus", scientific: "Pachycephalosaurus wyomingensis", blurb: "A bone-headed battering ram.", size: 4.5, speed: 30.0, attack: 6.0, element: Earth, sound: TriceratopsBellow, aliases: &["Pachy"] },
    DinoSpec { name: "Therizinosaurus", scientific: "Therizinosaurus cheloniformis", blurb: "The scythe-clawed reaper of the trees.", size: 10.0, speed: 20.0, attack: 8.0, element: Earth, sound: GenericRoar, aliases: &["Therizino"] },
    DinoSpec { name: "Baryonyx", scientific: "Baryonyx walkeri", blurb: "A hooked-claw fisherman of the wetlands.", size: 9.0, speed: 25.0, attack: 7.0, element: Water, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Compsognathus", scientific: "Compsognathus longipes", blurb: "A swarm of tiny, nimble hunters.", size: 1.0, speed: 60.0, attack: 2.0, element: Earth, sound: RaptorScreech, aliases: &["Compy"] },
    DinoSpec { name: "Diplodocus", scientific: "Diplodocus carnegii", blurb: "A whip-cracking giant of the plains.", size: 25.0, speed: 12.0, attack: 5.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Ceratosaurus", scientific: "Ceratosaurus nasicornis", blurb: "A horned dragon prowling the Jurassic.", size: 6.0, speed: 30.0, attack: 7.0, element: Earth, sound: TrexRoar, aliases: &[] },
    DinoSpec { name: "Styracosaurus", scientific: "Styracosaurus albertensis", blurb: "A spiked shield-wall on legs.", size: 5.5, speed: 25.0, attack: 8.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Plesiosaurus", scientific: "Plesiosaurus dolichodeirus", blurb: "A serpent-necked wraith of the ocean.", size: 3.5, speed: 20.0, attack: 5.0, element: Water, sound: GenericRoar, aliases: &["Nessie"] },
    DinoSpec { name: "Gallimimus", scientific: "Gallimimus bullatus", blurb: "The fastest sprinter of the badlands.", size: 6.0, speed: 80.0, attack: 3.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Microraptor", scientific: "Microraptor zhaoianus", blurb: "A four-winged phantom of the canopy.", size: 0.8, speed: 30.0, attack: 3.0, element: Sky, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Utahraptor", scientific: "Utahraptor ostrommaysi", blurb: "The heavyweight champion of the raptors.", size: 7.0, speed: 40.0, attack: 9.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Quetzalcoatlus", scientific: "Quetzalcoatlus northropi", blurb: "The giraffe-sized dragon of the skies.", size: 11.0, speed: 80.0, attack: 7.0, element: Sky, sound: RaptorScreech, aliases: &["Quetzal"] },
    DinoSpec { name: "Amargasaurus", scientific: "Amargasaurus cazaui", blurb: "A spiny-necked walker of the south.", size: 10.0, speed: 15.0, attack: 5.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Corythosaurus", scientific: "Corythosaurus casuarius", blurb: "A helmet-crested browser.", size: 9.0, speed: 30.0, attack: 4.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Kentrosaurus", scientific: "Kentrosaurus aethiopicus", blurb: "A prickly fortress of spikes.", size: 4.5, speed: 12.0, attack: 7.0, element: Earth, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Suchomimus", scientific: "Suchomimus tenerensis", blurb: "A crocodile-faced river stalker.", size: 11.0, speed: 25.0, attack: 8.0, element: Water, sound: TrexRoar, aliases: &[] },
    DinoSpec { name: "Pachyrhinosaurus", scientific: "Pachyrhinosaurus canadensis", blurb: "A boss-nosed brawler.", size: 6.0, speed: 25.0, attack: 6.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Kronosaurus", scientific: "Kronosaurus queenslandicus", blurb: "The car-sized jaws of the southern ocean.", size: 10.0, speed: 40.0, attack: 10.0, element: Water, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Deinocheirus", scientific: "Deinocheirus mirificus", blurb: "A gentle giant with terrifying arms.", size: 11.0, speed: 20.0, attack: 7.0, element: Earth, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Carcharodontosaurus", scientific: "Carcharodontosaurus saharicus", blurb: "The shark-toothed titan of Africa.", size: 12.0, speed: 35.0, attack: 9.0, element: Earth, sound: TrexRoar, aliases: &[] },
    DinoSpec { name: "Gorgosaurus", scientific: "Gorgosaurus libratus", blurb: "A sleek tyrannosaur built for the chase.", size: 9.0, speed: 48.0, attack: 8.0, element: Earth, sound: TrexRoar, aliases: &["Gorgo"] },
    DinoSpec { name: "Edmontosaurus", scientific: "Edmontosaurus annectens", blurb: "The colossal grazer of the Hell Creek.", size: 12.0, speed: 45.0, attack: 5.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Troodon", scientific: "Troodon formosus", blurb: "A nocturnal mastermind.", size: 2.0, speed: 40.0, attack: 5.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Albertosaurus", scientific: "Albertosaurus sarcophagus", blurb: "The fleet-footed terror of the north.", size: 10.0, speed: 40.0, attack: 9.0, element: Earth, sound: TrexRoar, aliases: &["Alberto"] },
    DinoSpec { name: "Megalosaurus", scientific: "Megalosaurus bucklandii", blurb: "The first titan ever named.", size: 9.0, speed: 30.0, attack: 8.0, element: Earth, sound: TrexRoar, aliases: &[] },
    DinoSpec { name: "Acrocanthosaurus", scientific: "Acrocanthosaurus atokensis", blurb: "A high-spined giant killer.", size: 11.5, speed: 35.0, attack: 9.0, element: Earth, sound: TrexRoar, aliases: &["Acro"] },
    DinoSpec { name: "Cryolophosaurus", scientific: "Cryolophosaurus ellioti", blurb: "The crested king of Antarctica.", size: 6.5, speed: 30.0, attack: 7.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Ouranosaurus", scientific: "Ouranosaurus nigeriensis", blurb: "A sail-backed oasis wanderer.", size: 8.0, speed: 25.0, attack: 5.0, element: Earth, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Herrerasaurus", scientific: "Herrerasaurus ischigualastensis", blurb: "A primitive prototype of the predators to come.", size: 4.0, speed: 45.0, attack: 6.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Deinonychus", scientific: "Deinonychus antirrhopus", blurb: "The terrible claw that redefined dinosaurs.", size: 3.4, speed: 50.0, attack: 8.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Brontosaurus", scientific: "Brontosaurus excelsus", blurb: "The thunder lizard that shook the earth.", size: 22.0, speed: 10.0, attack: 6.0, element: Earth, sound: TriceratopsBellow, aliases: &["Apatosaurus"] },
    DinoSpec { name: "Maiasaura", scientific: "Maiasaura peeblesorum", blurb: "The nurturing mother of the plains.", size: 9.0, speed: 25.0, attack: 4.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Oviraptor", scientific: "Oviraptor philoceratops", blurb: "The devoted guardian, falsely accused.", size: 1.5, speed: 50.0, attack: 6.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Plateosaurus", scientific: "Plateosaurus engelhardti", blurb: "The heavy-clawed pioneer of size.", size: 8.0, speed: 20.0, attack: 5.0, element: Earth, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Tarbosaurus", scientific: "Tarbosaurus bataar", blurb: "The crushing tyrant of the Gobi.", size: 10.0, speed: 30.0, attack: 9.0, element: Earth, sound: TrexRoar, aliases: &[] },
    DinoSpec { name: "Dreadnoughtus", scientific: "Dreadnoughtus schrani", blurb: "A titan that feared nothing.", size: 26.0, speed: 5.0, attack: 6.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Yutyrannus", scientific: "Yutyrannus huali", blurb: "The woolly tyrant of the ice.", size: 9.0, speed: 30.0, attack: 8.0, element: Earth, sound: TrexRoar, aliases: &[] },
    DinoSpec { name: "Majungasaurus", scientific: "Majungasaurus crenatissimus", blurb: "The cannibal king of Madagascar.", size: 7.0, speed: 25.0, attack: 8.0, element: Earth, sound: TrexRoar, aliases: &[] },
    DinoSpec { name: "Concavenator", scientific: "Concavenator corcovatus", blurb: "The humped hunter of Spain.", size: 6.0, speed: 35.0, attack: 7.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Sinoceratops", scientific: "Sinoceratops zhuchengensis", blurb: "The crowned herbivore of the East.", size: 6.0, speed: 25.0, attack: 7.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Dimetrodon", scientific: "Dimetrodon limbatus", blurb: "The sail-backed pioneer of the Permian.", size: 3.5, speed: 15.0, attack: 5.0, element: Earth, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Pyroraptor", scientific: "Pyroraptor olympius", blurb: "The fire thief of Olympus.", size: 2.5, speed: 45.0, attack: 7.0, element: Water, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Protoceratops", scientific: "Protoceratops andrewsi", blurb: "The gritty survivor of the dunes.", size: 2.0, speed: 25.0, attack: 4.0, element: Earth, sound: TriceratopsBellow, aliases: &[] },
    DinoSpec { name: "Coelophysis", scientific: "Coelophysis bauri", blurb: "The slender ghost of the Triassic.", size: 3.0, speed: 40.0, attack: 4.0, element: Earth, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Liopleurodon", scientific: "Liopleurodon ferox", blurb: "The magical giant of the deep.", size: 10.0, speed: 35.0, attack: 9.0, element: Water, sound: GenericRoar, aliases: &[] },
    DinoSpec { name: "Mapusaurus", scientific: "Mapusaurus roseae", blurb: "The giant-slayer of Patagonia.", size: 12.0, speed: 30.0, attack: 9.0, element: Earth, sound: TrexRoar, aliases: &["Mapu"] },
    DinoSpec { name: "Nothosaurus", scientific: "Nothosaurus mirabilis", blurb: "The seal-lizard of the Triassic shores.", size: 4.0, speed: 25.0, attack: 6.0, element: Water, sound: RaptorScreech, aliases: &[] },
    DinoSpec { name: "Dunkleosteus", scientific: "Dunkleosteus terrelli", blurb: "The armored tank of the Devonian seas.", size: 8.0, speed: 20.0, attack: 10.0, element: Water, sound: GenericRoar, aliases: &["Dunk"] },
    DinoSpec { name: "Sarcosuchus", scientific: "Sarcosuchus imperator", blurb: "The SuperCroc that ate dinosaurs.", size: 12.0, speed: 15.0, attack: 9.0, element: Water, sound: GenericRoar, aliases: &["SuperCroc"] },
    DinoSpec { name: "Gigantoraptor", scientific: "Gigantoraptor erlianensis", blurb: "The colossal bird of the desert.", size: 8.0, speed: 30.0, attack: 7.0, element: Earth, sound: RaptorScreech, aliases: &[] },
];

/// Two distinct fighters and the environment they meet in.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub fighters: [Dinosaur; 2],
    pub environment: String,
}

pub struct Catalog {
    dinosaurs: Vec<Dinosaur>,
}

impl Catalog {
    /// Builds the full embedded roster. Tier assignment comes from the
    /// fixed legendary name list.
    pub fn standard() -> Self {
        let dinosaurs: Vec<Dinosaur> = ROSTER
            .iter()
            .map(|spec| Dinosaur {
                name: spec.name.to_string(),
                scientific: spec.scientific.to_string(),
                blurb: spec.blurb.to_string(),
                size: spec.size,
                speed: spec.speed,
                attack: spec.attack,
                element: spec.element,
                tier: if LEGENDARY_NAMES.contains(&spec.name) {
                    Tier::Legendary
                } else {
                    Tier::Common
                },
                sound: spec.sound,
                aliases: spec.aliases.iter().map(|a| a.to_string()).collect(),
            })
            .collect();
        Self::from_records(dinosaurs)
    }

    /// Builds a catalog from caller-supplied records. Names must be
    /// unique; a duplicate is a malformed catalog, not a runtime
    /// condition.
    pub fn from_records(dinosaurs: Vec<Dinosaur>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = dinosaurs.iter().map(|d| d.name.as_str()).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "catalog names must be unique"
        );
        Self { dinosaurs }
    }

    /// All competitors available to this tier.
    pub fn roster(&self, premium: bool) -> Vec<&Dinosaur> {
        self.dinosaurs
            .iter()
            .filter(|d| premium || !d.is_legendary())
            .collect()
    }

    /// All environments available to this tier.
    pub fn environments(&self, premium: bool) -> Vec<&'static str> {
        let mut envs: Vec<&'static str> = BASIC_ENVIRONMENTS.to_vec();
        if premium {
            envs.extend_from_slice(&EXOTIC_ENVIRONMENTS);
        }
        envs
    }

    pub fn find(&self, name: &str) -> Option<&Dinosaur> {
        self.dinosaurs.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.dinosaurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dinosaurs.is_empty()
    }

    /// Uniform draw of two distinct competitors and one environment.
    pub fn draw_matchup<R: Rng>(&self, premium: bool, rng: &mut R) -> GameResult<Matchup> {
        let roster = self.roster(premium);
        if roster.len() < 2 {
            return Err(GameError::RosterTooSmall { have: roster.len() });
        }
        let envs = self.environments(premium);
        if envs.is_empty() {
            return Err(GameError::NoEnvironments);
        }

        let first = rng.gen_range(0..roster.len());
        // Draw without replacement: sample the remaining indices.
        let mut second = rng.gen_range(0..roster.len() - 1);
        if second >= first {
            second += 1;
        }
        let environment = envs[rng.gen_range(0..envs.len())].to_string();

        Ok(Matchup {
            fighters: [roster[first].clone(), roster[second].clone()],
            environment,
        })
    }
}
