//! Client-side translation of player input into authoritative action requests.
//!
//! `input-core` turns pointer clicks, key presses, analog input and UI button
//! presses into a bounded, ordered stream of [`ActionRequest`]s while locally
//! throttling movement and resolving context-dependent targets. Devices,
//! physics, transport and the catalog storage are injected through the traits
//! in [`env`]; all work flows through [`InputSender`].
pub mod action;
pub mod bindings;
pub mod config;
pub mod env;
pub mod intent;
pub mod movement;
pub mod sender;
pub mod session;
pub mod slot;
pub mod targeting;
pub mod types;

pub use action::{
    ActionDescriptor, ActionLogic, ActionRequest, ContinuousInputKind, TargetSet, TriggerKind,
};
pub use bindings::{InputEvent, PointerButton};
pub use config::InputConfig;
pub use env::{
    ActionCatalog, CharacterRecord, EntityKind, EntityView, Env, GroundProjector, HitBuffer,
    LayerMask, LifeStateFeed, LifeStateSubscription, Ray, RayHit, RequestChannel, SpatialQuery,
    TargetValidator, WatchHandle, WellKnownActions, WorldView,
};
pub use intent::{ActionIntent, IntentQueue};
pub use movement::{MoveSource, MovementThrottle};
pub use sender::{InputObserver, InputSender};
pub use session::{
    AreaTargetInput, BuiltinInputs, ChargedInput, ContinuousInput, ContinuousInputFactory,
    SessionContext, SessionOutcome, SkillSessionGate, SpawnContext,
};
pub use slot::{ActionSlotState, ActionSlots};
pub use targeting::{ResolveError, ResolvedTarget, TargetResolver};
pub use types::{ActionId, EntityId, LifeState, SlotIndex};
