use wasm_bindgen::prelude::*;
use serde::{Serialize, Deserialize};
use engine::{GameEngine, GamePhase, MoveRecord, Piece, PieceKind, Team};

/// JS에서 사용할 게임 래퍼
#[wasm_bindgen]
pub struct Game {
    engine: GameEngine,
}

/// JS로 전달할 기물 정보
#[derive(Serialize, Deserialize)]
pub struct JsPiece {
    pub kind: String,
    pub owner: u8,
    pub x: i32,
    pub y: i32,
    pub label: String,
}

/// JS로 전달할 목적지 좌표
#[derive(Serialize, Deserialize)]
pub struct JsDest {
    pub x: i32,
    pub y: i32,
}

/// JS로 전달할 이동 기록. 저장/복원의 직렬화 단위이기도 하다.
#[derive(Serialize, Deserialize)]
pub struct JsMoveRecord {
    pub player: u8,
    pub piece: String,
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
    pub captured: Option<JsPiece>,
    pub turn: u32,
    pub timestamp: u64,
    pub text: String,
}

/// 한 수의 실행 결과
#[derive(Serialize, Deserialize)]
pub struct JsOutcome {
    pub success: bool,
    pub captured: Option<JsPiece>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub game_ended: bool,
    pub winner: Option<u8>, // 1=팀1(홍청), 2=팀2(녹흑)
}

/// JS로 전달할 게임 상태
#[derive(Serialize, Deserialize)]
pub struct JsGameState {
    pub pieces: Vec<JsPiece>,
    pub current_player: u8,
    pub phase: String,
    pub turn: u32,
    pub piece_counts: Vec<u32>,
    pub is_game_over: bool,
    pub winner: Option<u8>,
    pub move_count: usize,
}

#[wasm_bindgen]
impl Game {
    /// 새 게임 생성 (표준 구성)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            engine: GameEngine::new(),
        }
    }

    /// 게임 시작
    #[wasm_bindgen]
    pub fn start_game(&mut self) {
        self.engine.start_game();
    }

    /// 초기 배치로 되돌리기
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// 디버그 모드 설정 (검증 추적 로그)
    #[wasm_bindgen]
    pub fn set_debug(&mut self, enabled: bool) {
        self.engine.set_debug(enabled);
    }

    /// 현재 게임 상태를 JSON으로 반환
    #[wasm_bindgen]
    pub fn get_state(&self) -> JsValue {
        let js_state = self.build_js_state();
        serde_wasm_bindgen::to_value(&js_state).unwrap()
    }

    /// 특정 칸의 기물 (없으면 null)
    #[wasm_bindgen]
    pub fn get_piece(&self, x: i32, y: i32) -> JsValue {
        match self.engine.get_piece(x, y) {
            Some(piece) => serde_wasm_bindgen::to_value(&piece_to_js(piece)).unwrap(),
            None => JsValue::NULL,
        }
    }

    /// 기물 선택. 성공하면 합법 목적지가 캐시된다.
    #[wasm_bindgen]
    pub fn select_piece(&mut self, x: i32, y: i32) -> bool {
        self.engine.select_piece(x, y)
    }

    /// 특정 칸의 기물이 갈 수 있는 칸 목록
    #[wasm_bindgen]
    pub fn get_valid_moves(&mut self, x: i32, y: i32) -> JsValue {
        let moves: Vec<JsDest> = self
            .engine
            .valid_moves(x, y)
            .into_iter()
            .map(|(x, y)| JsDest { x, y })
            .collect();
        serde_wasm_bindgen::to_value(&moves).unwrap()
    }

    /// 수 실행. 검증 → 이동 → 장군/외통/종료 판정까지 한 번에.
    #[wasm_bindgen]
    pub fn attempt_move(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> JsValue {
        let outcome = self.engine.attempt_move(from_x, from_y, to_x, to_y);
        let js_outcome = JsOutcome {
            success: outcome.success,
            captured: outcome.captured.as_ref().map(piece_to_js),
            is_check: outcome.is_check,
            is_checkmate: outcome.is_checkmate,
            game_ended: outcome.game_ended,
            winner: team_to_number(outcome.winner),
        };
        serde_wasm_bindgen::to_value(&js_outcome).unwrap()
    }

    /// 마지막 수 무르기
    #[wasm_bindgen]
    pub fn undo(&mut self) -> bool {
        self.engine.undo()
    }

    /// 현재 플레이어 팀의 기권
    #[wasm_bindgen]
    pub fn surrender(&mut self) -> bool {
        self.engine.surrender()
    }

    /// 전체 이동 기록
    #[wasm_bindgen]
    pub fn get_move_history(&self) -> JsValue {
        let records: Vec<JsMoveRecord> = self
            .engine
            .move_history()
            .iter()
            .map(record_to_js)
            .collect();
        serde_wasm_bindgen::to_value(&records).unwrap()
    }

    /// 마지막 수의 기보 문자열 (없으면 빈 문자열)
    #[wasm_bindgen]
    pub fn last_move_text(&self) -> String {
        self.engine
            .move_history()
            .last()
            .map(|record| record.format())
            .unwrap_or_default()
    }

    /// 현재 플레이어
    #[wasm_bindgen]
    pub fn current_player(&self) -> u8 {
        self.engine.state.current_player
    }

    /// 플레이어가 장군 상태인지
    #[wasm_bindgen]
    pub fn is_in_check(&self, player: u8) -> bool {
        self.engine.is_in_check(player)
    }

    /// 게임 종료 여부
    #[wasm_bindgen]
    pub fn is_game_over(&self) -> bool {
        self.engine.state.phase == GamePhase::Finished
    }

    /// 승자 (0=진행중, 1=팀1, 2=팀2)
    #[wasm_bindgen]
    pub fn winner(&self) -> u8 {
        team_to_number(self.engine.state.winner).unwrap_or(0)
    }

    // === Private helpers ===

    fn build_js_state(&self) -> JsGameState {
        let pieces: Vec<JsPiece> = self
            .engine
            .all_pieces()
            .iter()
            .map(piece_to_js)
            .collect();
        let info = self.engine.game_info();
        JsGameState {
            pieces,
            current_player: info.current_player,
            phase: phase_to_string(info.phase),
            turn: info.turn,
            piece_counts: info.piece_counts.to_vec(),
            is_game_over: info.phase == GamePhase::Finished,
            winner: team_to_number(info.winner),
            move_count: info.move_count,
        }
    }
}

fn kind_to_string(kind: &PieceKind) -> String {
    match kind {
        PieceKind::King => "king".to_string(),
        PieceKind::Advisor => "advisor".to_string(),
        PieceKind::Elephant => "elephant".to_string(),
        PieceKind::Horse => "horse".to_string(),
        PieceKind::Rook => "rook".to_string(),
        PieceKind::Cannon => "cannon".to_string(),
        PieceKind::Pawn => "pawn".to_string(),
    }
}

fn phase_to_string(phase: GamePhase) -> String {
    match phase {
        GamePhase::Ready => "ready".to_string(),
        GamePhase::Playing => "playing".to_string(),
        GamePhase::Finished => "finished".to_string(),
    }
}

fn team_to_number(team: Option<Team>) -> Option<u8> {
    match team {
        Some(Team::One) => Some(1),
        Some(Team::Two) => Some(2),
        None => None,
    }
}

fn piece_to_js(piece: &Piece) -> JsPiece {
    JsPiece {
        kind: kind_to_string(&piece.kind),
        owner: piece.owner,
        x: piece.x,
        y: piece.y,
        label: piece.label().to_string(),
    }
}

fn record_to_js(record: &MoveRecord) -> JsMoveRecord {
    JsMoveRecord {
        player: record.player,
        piece: kind_to_string(&record.piece),
        from_x: record.from.0,
        from_y: record.from.1,
        to_x: record.to.0,
        to_y: record.to.1,
        captured: record.captured.as_ref().map(piece_to_js),
        turn: record.turn,
        timestamp: record.timestamp,
        text: record.format(),
    }
}

/// 콘솔 로그 (디버깅용)
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[wasm_bindgen(start)]
pub fn main() {
    log("Sabang WASM initialized!");
}
