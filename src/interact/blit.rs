//! Blit-Pipeline: gecachter Hintergrund plus dynamische Artists.
//!
//! Im aktiven Zustand wird der statische Layer (Daten, Achsenrahmen,
//! native Artists) einmal als Hintergrund eingefroren; pro Frame werden
//! nur die dynamischen Artists darueber gezeichnet. `notify_full_redraw`
//! invalidiert den Cache, der naechste `draw` friert neu ein. Deaktiviert
//! wird jeder Frame komplett aufgebaut.

use indexmap::IndexMap;

use crate::core::PlotShape;

/// Stabile Kennung eines registrierten Artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtistId(pub u64);

/// Layer-Zuordnung eines Artists, festgelegt bei der Registrierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArtistLayer {
    /// Pro Frame ueber den Hintergrund gezeichnet (Kurven-Preview, Punkte)
    Dynamic,
    /// Teil des eingefrorenen Hintergrunds
    Native,
}

#[derive(Debug, Clone)]
struct Artist {
    layer: ArtistLayer,
    shape: Option<PlotShape>,
    visible: bool,
}

/// Zeichenflaeche mit Hintergrund-Cache.
#[derive(Debug, Default)]
pub struct BlitSurface {
    enabled: bool,
    /// Statischer Layer, wie bei `enable` uebergeben
    static_layer: Vec<PlotShape>,
    /// Eingefrorener Hintergrund (statischer Layer + native Artists)
    background: Vec<PlotShape>,
    background_stale: bool,
    artists: IndexMap<ArtistId, Artist>,
    next_id: u64,
}

impl BlitSurface {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Aktivierung ──────────────────────────────────────────────────

    /// Aktiviert die Pipeline und friert den Hintergrund ein.
    pub fn enable(&mut self, static_layer: Vec<PlotShape>) {
        self.static_layer = static_layer;
        self.enabled = true;
        self.background_stale = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Markiert den Hintergrund als veraltet. Der naechste `draw` friert
    /// statischen Layer und native Artists neu ein.
    pub fn notify_full_redraw(&mut self) {
        self.background_stale = true;
    }

    /// Ersetzt den statischen Layer (z.B. nach Achsen-Aenderung) und
    /// invalidiert den Cache.
    pub fn set_static_layer(&mut self, static_layer: Vec<PlotShape>) {
        self.static_layer = static_layer;
        self.background_stale = true;
    }

    /// Deaktiviert die Pipeline fuer die Lebensdauer des Guards. Beim Drop
    /// wird sie wieder aktiviert und der Hintergrund invalidiert.
    pub fn scoped_disable(&mut self) -> BlitPause<'_> {
        let was_enabled = self.enabled;
        self.enabled = false;
        BlitPause {
            surface: self,
            was_enabled,
        }
    }

    // ── Artists ──────────────────────────────────────────────────────

    /// Registriert einen dynamischen Artist (pro Frame gezeichnet).
    pub fn add_dynamic(&mut self) -> ArtistId {
        self.add_artist(ArtistLayer::Dynamic)
    }

    /// Registriert einen nativen Artist (Teil des Hintergrunds).
    pub fn add_native(&mut self) -> ArtistId {
        self.add_artist(ArtistLayer::Native)
    }

    fn add_artist(&mut self, layer: ArtistLayer) -> ArtistId {
        let id = ArtistId(self.next_id);
        self.next_id += 1;
        self.artists.insert(
            id,
            Artist {
                layer,
                shape: None,
                visible: true,
            },
        );
        if layer == ArtistLayer::Native {
            self.background_stale = true;
        }
        id
    }

    /// Setzt die Form eines Artists. Bei nativen Artists wird der
    /// Hintergrund invalidiert.
    pub fn set_shape(&mut self, id: ArtistId, shape: PlotShape) {
        if let Some(artist) = self.artists.get_mut(&id) {
            if artist.layer == ArtistLayer::Native {
                self.background_stale = true;
            }
            artist.shape = Some(shape);
        }
    }

    pub fn set_visible(&mut self, id: ArtistId, visible: bool) {
        if let Some(artist) = self.artists.get_mut(&id) {
            if artist.layer == ArtistLayer::Native && artist.visible != visible {
                self.background_stale = true;
            }
            artist.visible = visible;
        }
    }

    /// Entfernt einen Artist aus der Registry.
    pub fn remove(&mut self, id: ArtistId) {
        if let Some(artist) = self.artists.shift_remove(&id) {
            if artist.layer == ArtistLayer::Native {
                self.background_stale = true;
            }
        }
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Ob der naechste `draw` den Hintergrund neu einfrieren muss.
    pub fn is_background_stale(&self) -> bool {
        self.background_stale
    }

    // ── Frame-Aufbau ─────────────────────────────────────────────────

    /// Baut den sichtbaren Frame auf. Mehrfachaufruf ohne Zustandsaenderung
    /// liefert identische Frames.
    pub fn draw(&mut self) -> Vec<PlotShape> {
        if self.enabled {
            if self.background_stale {
                self.background = self.compose_background();
                self.background_stale = false;
            }
            let mut frame = self.background.clone();
            frame.extend(self.layer_shapes(ArtistLayer::Dynamic));
            frame
        } else {
            let mut frame = self.static_layer.clone();
            frame.extend(self.layer_shapes(ArtistLayer::Native));
            frame.extend(self.layer_shapes(ArtistLayer::Dynamic));
            frame
        }
    }

    fn compose_background(&self) -> Vec<PlotShape> {
        let mut bg = self.static_layer.clone();
        bg.extend(self.layer_shapes(ArtistLayer::Native));
        bg
    }

    fn layer_shapes(&self, layer: ArtistLayer) -> Vec<PlotShape> {
        self.artists
            .values()
            .filter(|a| a.layer == layer && a.visible)
            .filter_map(|a| a.shape.clone())
            .collect()
    }
}

/// RAII-Guard fuer eine temporaer deaktivierte Pipeline.
pub struct BlitPause<'a> {
    surface: &'a mut BlitSurface,
    was_enabled: bool,
}

impl BlitPause<'_> {
    pub fn surface(&mut self) -> &mut BlitSurface {
        self.surface
    }
}

impl Drop for BlitPause<'_> {
    fn drop(&mut self) {
        if self.was_enabled {
            self.surface.enabled = true;
            self.surface.background_stale = true;
        }
    }
}
