//! Drag-Steuerung fuer Kontrollpunkte.
//!
//! Es darf systemweit hoechstens ein Punkt gleichzeitig gezogen werden.
//! Der Bewegungs-Lock (`dragging`) erzwingt das: solange er gesetzt ist,
//! ignoriert `on_button_press` jeden weiteren Punkt. Beobachter haengen als
//! Token-Liste am Punkt; wer auf eine Bewegung reagieren will, registriert
//! sich per `connect` und bekommt die Tokens im `DragCommit` zurueck.

use glam::Vec2;
use indexmap::IndexMap;

use super::point::{ControlPoint, PointId};
use crate::core::Rgba;

/// Standard-Fangbereich relativ zum sichtbaren Punktradius.
pub const HIT_RADIUS_FACTOR: f32 = 1.5;

/// Registrierungs-Token eines Bewegungs-Beobachters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverToken(pub u64);

/// Ergebnis eines verarbeiteten Pointer-Moves waehrend eines Drags.
#[derive(Debug, Clone, PartialEq)]
pub struct DragCommit {
    /// Der bewegte Punkt
    pub point: PointId,
    /// Neue Position in Display-Koordinaten
    pub display_pos: Vec2,
    /// Beobachter, die ueber die Bewegung informiert werden wollen
    pub observers: Vec<ObserverToken>,
}

/// Verwaltet Kontrollpunkte und den exklusiven Drag-Zustand.
#[derive(Debug)]
pub struct DragController {
    points: IndexMap<PointId, ControlPoint>,
    observers: IndexMap<PointId, Vec<ObserverToken>>,
    dragging: Option<PointId>,
    /// Fangbereich relativ zum Punktradius
    hit_slack: f32,
    next_point: u64,
    next_token: u64,
}

impl Default for DragController {
    fn default() -> Self {
        Self {
            points: IndexMap::new(),
            observers: IndexMap::new(),
            dragging: None,
            hit_slack: HIT_RADIUS_FACTOR,
            next_point: 0,
            next_token: 0,
        }
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt den Fangbereich relativ zum Punktradius.
    pub fn set_hit_slack(&mut self, slack: f32) {
        self.hit_slack = slack;
    }

    // ── Punktverwaltung ──────────────────────────────────────────────

    /// Legt einen neuen Kontrollpunkt an.
    pub fn add_point(&mut self, display: Vec2, radius: f32, color: Rgba) -> PointId {
        let id = PointId(self.next_point);
        self.next_point += 1;
        self.points.insert(id, ControlPoint::new(id, display, radius, color));
        self.observers.insert(id, Vec::new());
        id
    }

    /// Entfernt einen Punkt samt Beobachtern. Ein laufender Drag auf diesem
    /// Punkt wird abgebrochen.
    pub fn remove_point(&mut self, id: PointId) {
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        self.points.shift_remove(&id);
        self.observers.shift_remove(&id);
    }

    pub fn point(&self, id: PointId) -> Option<&ControlPoint> {
        self.points.get(&id)
    }

    pub fn points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.values()
    }

    /// Setzt die Position eines Punkts direkt (z.B. nach Re-Projektion).
    pub fn set_position(&mut self, id: PointId, display: Vec2) {
        if let Some(p) = self.points.get_mut(&id) {
            p.display = display;
        }
    }

    pub fn set_visible(&mut self, id: PointId, visible: bool) {
        if let Some(p) = self.points.get_mut(&id) {
            p.visible = visible;
        }
    }

    // ── Beobachter ───────────────────────────────────────────────────

    /// Registriert einen Beobachter am Punkt und liefert dessen Token.
    pub fn connect(&mut self, id: PointId) -> ObserverToken {
        let token = ObserverToken(self.next_token);
        self.next_token += 1;
        if let Some(list) = self.observers.get_mut(&id) {
            list.push(token);
        }
        token
    }

    /// Meldet einen Beobachter wieder ab. Unbekannte Tokens sind ein No-Op.
    pub fn disconnect(&mut self, id: PointId, token: ObserverToken) {
        if let Some(list) = self.observers.get_mut(&id) {
            list.retain(|t| *t != token);
        }
    }

    // ── Drag-Lebenszyklus ────────────────────────────────────────────

    /// Versucht einen Drag zu starten. Liefert den gegriffenen Punkt oder
    /// `None`, wenn kein Punkt getroffen wurde oder bereits ein Drag laeuft.
    pub fn on_button_press(&mut self, pos: Vec2) -> Option<PointId> {
        if self.dragging.is_some() {
            return None;
        }
        let hit = self
            .points
            .values()
            .find(|p| p.hit_test(pos, self.hit_slack))?
            .id;
        self.dragging = Some(hit);
        Some(hit)
    }

    /// Verarbeitet eine Pointer-Bewegung. Ohne aktiven Drag passiert nichts.
    pub fn on_pointer_move(&mut self, pos: Vec2) -> Option<DragCommit> {
        let id = self.dragging?;
        let point = self.points.get_mut(&id)?;
        point.display = pos;
        Some(DragCommit {
            point: id,
            display_pos: pos,
            observers: self.observers.get(&id).cloned().unwrap_or_default(),
        })
    }

    /// Beendet den laufenden Drag und gibt den Lock frei.
    pub fn on_button_release(&mut self) -> Option<PointId> {
        self.dragging.take()
    }

    /// Bricht einen laufenden Drag ab, ohne die Punktposition anzufassen.
    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<PointId> {
        self.dragging
    }
}
